use super::*;
use crate::registry::StrategyId;
use othello_core::LocalEngine;

const HUMAN: PlayerAssignment = PlayerAssignment::Human;

fn bot(id: StrategyId) -> PlayerAssignment {
    PlayerAssignment::Strategy(id)
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_default_delay() {
    assert_eq!(MoveScheduler::default().delay(), ms(300));
}

#[test]
fn test_bot_opening_is_scheduled() {
    let mut engine = LocalEngine::new();
    let mut session = GameSession::new();
    let mut scheduler = MoveScheduler::default();
    let t0 = Instant::now();

    let control = scheduler.restart(&mut session, &mut engine, bot(StrategyId::TopLeft), HUMAN, t0);
    assert_eq!(control, Control::BotToMove(Color::Black));

    let ticket = scheduler.pending().unwrap();
    assert_eq!(ticket.color, Color::Black);
    assert_eq!(ticket.generation, 1);
    assert_eq!(scheduler.next_due(), Some(t0 + ms(300)));
}

#[test]
fn test_human_opening_schedules_nothing() {
    let mut engine = LocalEngine::new();
    let mut session = GameSession::new();
    let mut scheduler = MoveScheduler::default();

    scheduler.restart(&mut session, &mut engine, HUMAN, bot(StrategyId::Random), Instant::now());
    assert_eq!(scheduler.pending(), None);
    assert_eq!(scheduler.next_due(), None);
}

#[test]
fn test_poll_waits_for_deadline() {
    let mut engine = LocalEngine::new();
    let mut session = GameSession::new();
    let mut scheduler = MoveScheduler::default();
    let t0 = Instant::now();
    scheduler.restart(&mut session, &mut engine, bot(StrategyId::TopLeft), HUMAN, t0);

    assert_eq!(scheduler.poll(t0 + ms(299), &mut session, &mut engine), None);
    assert!(session.history().is_empty());

    let control = scheduler.poll(t0 + ms(300), &mut session, &mut engine);
    assert_eq!(control, Some(Control::HumanToMove(Color::White)));
    assert_eq!(session.history().len(), 1);
    assert_eq!(scheduler.pending(), None);
}

#[test]
fn test_human_move_schedules_bot_reply() {
    let mut engine = LocalEngine::new();
    let mut session = GameSession::new();
    let mut scheduler = MoveScheduler::new(ms(50));
    let t0 = Instant::now();
    scheduler.restart(&mut session, &mut engine, HUMAN, bot(StrategyId::TopLeft), t0);

    // d6 is legal for Black at the start
    let control = scheduler.human_move(&mut session, &mut engine, 3, 2, t0);
    assert_eq!(control, Some(Control::BotToMove(Color::White)));
    assert_eq!(scheduler.next_due(), Some(t0 + ms(50)));

    let reply = scheduler.poll(t0 + ms(50), &mut session, &mut engine);
    assert_eq!(reply, Some(Control::HumanToMove(Color::Black)));
    assert_eq!(session.history().len(), 2);
}

#[test]
fn test_bot_chain_reschedules() {
    let mut engine = LocalEngine::new();
    let mut session = GameSession::new();
    let mut scheduler = MoveScheduler::new(ms(10));
    let t0 = Instant::now();
    scheduler.restart(
        &mut session,
        &mut engine,
        bot(StrategyId::TopLeft),
        bot(StrategyId::BottomRight),
        t0,
    );

    let mut now = t0;
    let mut plies = 0;
    while let Some(due) = scheduler.next_due() {
        now = due;
        assert!(scheduler.poll(now, &mut session, &mut engine).is_some());
        plies += 1;
        assert!(plies <= 128);
    }

    assert!(!session.is_active());
    assert!(now > t0);
}

#[test]
fn test_restart_cancels_pending_ticket() {
    let mut engine = LocalEngine::new();
    let mut session = GameSession::new();
    let mut scheduler = MoveScheduler::default();
    let t0 = Instant::now();
    scheduler.restart(&mut session, &mut engine, bot(StrategyId::TopLeft), HUMAN, t0);

    scheduler.restart(&mut session, &mut engine, HUMAN, HUMAN, t0 + ms(100));
    assert_eq!(scheduler.pending(), None);
    assert_eq!(scheduler.poll(t0 + ms(1000), &mut session, &mut engine), None);
    assert!(session.history().is_empty());
}

#[test]
fn test_stale_generation_is_noop() {
    let mut engine = LocalEngine::new();
    let mut session = GameSession::new();
    let mut scheduler = MoveScheduler::default();
    let t0 = Instant::now();
    scheduler.restart(&mut session, &mut engine, bot(StrategyId::TopLeft), HUMAN, t0);

    // restart behind the scheduler's back keeps the old ticket around
    session.start(&mut engine, bot(StrategyId::TopLeft), HUMAN);
    assert_eq!(session.generation(), 2);

    assert_eq!(scheduler.poll(t0 + ms(300), &mut session, &mut engine), None);
    assert!(session.history().is_empty());
    assert_eq!(scheduler.pending(), None);
}

#[test]
fn test_wrong_turn_ticket_is_noop() {
    let mut engine = LocalEngine::new();
    let mut session = GameSession::new();
    let mut scheduler = MoveScheduler::default();
    let t0 = Instant::now();
    session.start(&mut engine, bot(StrategyId::TopLeft), bot(StrategyId::TopLeft));

    scheduler.pending = Some(Ticket {
        due: t0,
        color: Color::White,
        generation: session.generation(),
    });
    assert_eq!(scheduler.poll(t0, &mut session, &mut engine), None);
    assert!(session.history().is_empty());
}

#[test]
fn test_human_seat_ticket_is_noop() {
    let mut engine = LocalEngine::new();
    let mut session = GameSession::new();
    let mut scheduler = MoveScheduler::default();
    let t0 = Instant::now();
    session.start(&mut engine, HUMAN, HUMAN);

    scheduler.pending = Some(Ticket {
        due: t0,
        color: Color::Black,
        generation: session.generation(),
    });
    assert_eq!(scheduler.poll(t0, &mut session, &mut engine), None);
    assert!(session.history().is_empty());
}

#[test]
fn test_cancel_returns_ticket() {
    let mut engine = LocalEngine::new();
    let mut session = GameSession::new();
    let mut scheduler = MoveScheduler::default();
    let t0 = Instant::now();
    scheduler.restart(&mut session, &mut engine, bot(StrategyId::Center), HUMAN, t0);

    assert_eq!(scheduler.cancel().map(|t| t.color), Some(Color::Black));
    assert_eq!(scheduler.cancel(), None);
    assert!(!scheduler.is_due(t0 + ms(1000)));
}
