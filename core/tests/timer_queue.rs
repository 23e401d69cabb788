use flytrap_core::TimerQueue;

#[test]
fn fires_only_once_due() {
    let mut timers = TimerQueue::new();
    timers.schedule(2000, "catch");
    assert_eq!(timers.next_due(), Some(2000));

    assert!(timers.advance(500).is_empty());
    assert!(timers.advance(1499).is_empty());
    assert_eq!(timers.now_ms(), 1999);
    assert_eq!(timers.advance(1), vec![(2000, "catch")]);
    assert!(timers.is_empty());
    assert!(timers.advance(10_000).is_empty());
}

#[test]
fn fires_in_due_order_then_schedule_order() {
    let mut timers = TimerQueue::new();
    timers.schedule(300, "late");
    timers.schedule(100, "first");
    timers.schedule(100, "second");
    timers.schedule(0, "now");

    let fired: Vec<_> = timers.advance(1000).into_iter().map(|(_, t)| t).collect();
    assert_eq!(fired, vec!["now", "first", "second", "late"]);
}

#[test]
fn delays_are_relative_to_current_clock() {
    let mut timers = TimerQueue::new();
    timers.advance(750);
    timers.schedule(250, 7u32);
    assert_eq!(timers.next_due(), Some(1000));
    assert_eq!(timers.advance(250), vec![(1000, 7)]);
}

#[test]
fn cancelled_timers_never_fire() {
    let mut timers = TimerQueue::new();
    let keep = timers.schedule(10, 'a');
    let drop = timers.schedule(10, 'b');
    assert_ne!(keep, drop);

    assert_eq!(timers.cancel(drop), Some('b'));
    assert_eq!(timers.cancel(drop), None);
    assert_eq!(timers.len(), 1);
    assert_eq!(timers.advance(10), vec![(10, 'a')]);
}

#[test]
fn clear_drops_everything_pending() {
    let mut timers = TimerQueue::new();
    timers.schedule(1, ());
    timers.schedule(2, ());
    timers.clear();
    assert!(timers.is_empty());
    assert_eq!(timers.next_due(), None);
    assert!(timers.advance(5).is_empty());
}
