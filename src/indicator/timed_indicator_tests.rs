//! Tests for timed_indicator

use super::*;
use proptest::prelude::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn shown_at(indicator: &mut TimedIndicator, props: &IndicatorProps, now: Instant) -> bool {
    indicator.banner_at(props, now).is_some()
}

// ==================== Unit Tests ====================

#[test]
fn test_starts_hidden() {
    let indicator = TimedIndicator::new();
    assert!(!indicator.is_shown());
    assert_eq!(indicator.phase(), &IndicatorPhase::Hidden);
    assert_eq!(indicator.next_deadline(), None);
    assert_eq!(indicator.activation(), 0);
    assert_eq!(indicator.auto_hide(), ms(2000));
}

#[test]
fn test_hidden_props_render_nothing() {
    let mut indicator = TimedIndicator::new();
    let t0 = Instant::now();
    assert_eq!(indicator.banner_at(&IndicatorProps::hidden(), t0), None);
}

#[test]
fn test_shows_immediately_with_default_message() {
    let mut indicator = TimedIndicator::new();
    let t0 = Instant::now();

    let banner = indicator.banner_at(&IndicatorProps::visible(), t0).unwrap();

    assert_eq!(banner.message, "Restoring your data...");
    assert_eq!(banner.kind, BannerKind::Restored);
    assert_eq!(indicator.activation(), 1);
}

#[test]
fn test_shows_given_message() {
    let mut indicator = TimedIndicator::new();
    let props = IndicatorProps::visible().with_message("Cache restored");

    let banner = indicator.banner_at(&props, Instant::now()).unwrap();
    assert_eq!(banner.message, "Cache restored");
}

#[test]
fn test_stays_visible_until_window_elapses() {
    let mut indicator = TimedIndicator::new();
    let props = IndicatorProps::visible();
    let t0 = Instant::now();

    assert!(shown_at(&mut indicator, &props, t0));
    assert!(shown_at(&mut indicator, &props, t0 + ms(1000)));
    assert!(shown_at(&mut indicator, &props, t0 + ms(1999)));
    assert!(!shown_at(&mut indicator, &props, t0 + ms(2000)));
}

#[test]
fn test_hidden_after_2100ms_without_prop_change() {
    let mut indicator = TimedIndicator::new();
    let props = IndicatorProps::visible();
    let t0 = Instant::now();

    assert!(shown_at(&mut indicator, &props, t0));
    assert!(!shown_at(&mut indicator, &props, t0 + ms(2100)));
    assert_eq!(indicator.next_deadline(), None);
}

#[test]
fn test_stays_hidden_while_flag_remains_set() {
    let mut indicator = TimedIndicator::new();
    let props = IndicatorProps::visible();
    let t0 = Instant::now();

    indicator.update_at(&props, t0);
    assert!(indicator.tick_at(t0 + ms(2000)));

    // Same props again is not a new activation
    assert!(!shown_at(&mut indicator, &props, t0 + ms(5000)));
    assert_eq!(indicator.activation(), 1);
}

#[test]
fn test_falling_edge_hides_immediately() {
    let mut indicator = TimedIndicator::new();
    let t0 = Instant::now();

    assert!(shown_at(&mut indicator, &IndicatorProps::visible(), t0));
    assert!(!shown_at(
        &mut indicator,
        &IndicatorProps::hidden(),
        t0 + ms(500)
    ));
    assert_eq!(indicator.next_deadline(), None);
}

#[test]
fn test_stale_timer_never_hides_new_activation() {
    let mut indicator = TimedIndicator::new();
    let t0 = Instant::now();

    indicator.update_at(&IndicatorProps::visible(), t0);
    indicator.update_at(&IndicatorProps::hidden(), t0 + ms(500));
    indicator.update_at(&IndicatorProps::visible(), t0 + ms(1500));

    // First activation's deadline (t0 + 2000) has passed
    assert!(!indicator.tick_at(t0 + ms(2100)));
    assert!(indicator.is_shown());
    assert_eq!(indicator.activation(), 2);

    // Second activation hides on its own deadline
    assert!(!indicator.tick_at(t0 + ms(3499)));
    assert!(indicator.tick_at(t0 + ms(3500)));
    assert!(!indicator.is_shown());
}

#[test]
fn test_rising_edge_restarts_window() {
    let mut indicator = TimedIndicator::new();
    let t0 = Instant::now();

    indicator.update_at(&IndicatorProps::visible(), t0);
    indicator.update_at(&IndicatorProps::hidden(), t0 + ms(1800));
    indicator.update_at(&IndicatorProps::visible(), t0 + ms(1900));

    assert_eq!(indicator.next_deadline(), Some(t0 + ms(3900)));
}

#[test]
fn test_retrigger_while_shown_restarts_window() {
    let mut indicator = TimedIndicator::new();
    let t0 = Instant::now();

    indicator.update_at(&IndicatorProps::visible(), t0);
    indicator.retrigger_at(t0 + ms(1500));

    assert_eq!(indicator.activation(), 2);
    assert!(!indicator.tick_at(t0 + ms(3000)));
    assert!(indicator.is_shown());
    assert!(indicator.tick_at(t0 + ms(3500)));
}

#[test]
fn test_retrigger_after_auto_hide_shows_again() {
    let mut indicator = TimedIndicator::new();
    let props = IndicatorProps::visible();
    let t0 = Instant::now();

    indicator.update_at(&props, t0);
    indicator.tick_at(t0 + ms(2500));
    assert!(!indicator.is_shown());

    indicator.retrigger_at(t0 + ms(3000));
    assert!(shown_at(&mut indicator, &props, t0 + ms(3000)));
}

#[test]
fn test_retrigger_ignored_while_flag_clear() {
    let mut indicator = TimedIndicator::new();
    indicator.retrigger_at(Instant::now());

    assert!(!indicator.is_shown());
    assert_eq!(indicator.activation(), 0);
}

#[test]
fn test_identical_props_do_not_reschedule() {
    let mut indicator = TimedIndicator::new();
    let props = IndicatorProps::visible();
    let t0 = Instant::now();

    let first = indicator.banner_at(&props, t0);
    let deadline = indicator.next_deadline();
    let second = indicator.banner_at(&props, t0 + ms(300));

    assert_eq!(first, second);
    assert_eq!(indicator.next_deadline(), deadline);
    assert_eq!(indicator.activation(), 1);
}

#[test]
fn test_message_change_does_not_restart_window() {
    let mut indicator = TimedIndicator::new();
    let t0 = Instant::now();

    indicator.banner_at(&IndicatorProps::visible().with_message("one"), t0);
    let banner = indicator
        .banner_at(&IndicatorProps::visible().with_message("two"), t0 + ms(1000))
        .unwrap();

    assert_eq!(banner.message, "two");
    assert_eq!(indicator.next_deadline(), Some(t0 + ms(2000)));
}

#[test]
fn test_remaining_at_counts_down() {
    let mut indicator = TimedIndicator::new();
    let t0 = Instant::now();

    assert_eq!(indicator.remaining_at(t0), None);
    indicator.update_at(&IndicatorProps::visible(), t0);
    assert_eq!(indicator.remaining_at(t0 + ms(750)), Some(ms(1250)));
}

#[test]
fn test_custom_window_and_message() {
    let mut indicator = TimedIndicator::new()
        .with_auto_hide(ms(500))
        .with_default_message("Back online");
    let props = IndicatorProps::visible();
    let t0 = Instant::now();

    assert_eq!(indicator.default_message(), "Back online");
    assert!(shown_at(&mut indicator, &props, t0 + ms(0)));
    assert!(!shown_at(&mut indicator, &props, t0 + ms(500)));
}

#[test]
fn test_tick_without_timer_is_noop() {
    let mut indicator = TimedIndicator::new();
    assert!(!indicator.tick_at(Instant::now()));
}

#[test]
fn test_wall_clock_wrappers() {
    let mut indicator = TimedIndicator::new().with_auto_hide(ms(10));
    indicator.update(&IndicatorProps::visible());
    assert!(indicator.is_shown());

    std::thread::sleep(ms(20));
    assert!(indicator.tick());
    assert!(!indicator.is_shown());

    indicator.retrigger();
    assert!(indicator.is_shown());
    indicator.unmount();
}

// ==================== Property Tests ====================

#[derive(Debug, Clone)]
enum Op {
    SetVisible(bool),
    Advance(u64),
    Retrigger,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<bool>().prop_map(Op::SetVisible),
        (0u64..3000).prop_map(Op::Advance),
        Just(Op::Retrigger),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // The banner is shown exactly when the flag is set and less than the
    // window has passed since the most recent activation.
    #[test]
    fn prop_shown_matches_activation_window(ops in proptest::collection::vec(op_strategy(), 1..40)) {
        let window = ms(2000);
        let t0 = Instant::now();
        let mut now = t0;
        let mut indicator = TimedIndicator::new();
        let mut props = IndicatorProps::hidden();

        let mut model_visible = false;
        let mut model_since: Option<Instant> = None;

        for op in ops {
            match op {
                Op::SetVisible(v) => {
                    props = IndicatorProps::new(v);
                    if v != model_visible {
                        model_since = v.then_some(now);
                    }
                    model_visible = v;
                }
                Op::Advance(delta) => now += ms(delta),
                Op::Retrigger => {
                    indicator.retrigger_at(now);
                    if model_visible {
                        model_since = Some(now);
                    }
                }
            }

            let expected = model_since.is_some_and(|since| now < since + window);
            let shown = indicator.banner_at(&props, now).is_some();
            prop_assert_eq!(shown, expected);
            prop_assert!(!shown || props.is_visible);
        }
    }

    // The pending deadline is always within one window of the current time
    #[test]
    fn prop_deadline_never_exceeds_window(ops in proptest::collection::vec(op_strategy(), 1..40)) {
        let t0 = Instant::now();
        let mut now = t0;
        let mut indicator = TimedIndicator::new();
        let mut props = IndicatorProps::hidden();

        for op in ops {
            match op {
                Op::SetVisible(v) => props = IndicatorProps::new(v),
                Op::Advance(delta) => now += ms(delta),
                Op::Retrigger => indicator.retrigger_at(now),
            }
            indicator.banner_at(&props, now);

            if let Some(deadline) = indicator.next_deadline() {
                prop_assert!(deadline > now);
                prop_assert!(deadline <= now + indicator.auto_hide());
            }
        }
    }
}
