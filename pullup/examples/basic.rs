use pullup::{PullOptions, PullTracker, ScrollEvent, ScrollMetrics};

fn main() {
    // 1000 units of content in a 500 unit viewport: the bottom rest offset is 500.
    let metrics = ScrollMetrics::new(0.0, 1000.0, 500.0).with_insets(0.0, 20.0);
    let mut t = PullTracker::new(PullOptions::default());

    let gesture = [
        (ScrollEvent::DragBegin, 495.0),
        (ScrollEvent::PositionChanged, 505.0),
        (ScrollEvent::PositionChanged, 520.0),
        (ScrollEvent::PositionChanged, 600.0),
        (
            ScrollEvent::DragEnd {
                will_decelerate: true,
            },
            650.0,
        ),
        (ScrollEvent::PositionChanged, 580.0),
        (ScrollEvent::DecelerationEnd, 500.0),
    ];

    for (event, offset) in gesture {
        let m = metrics.with_offset(offset);
        let effects = t.handle_event_collect(event, m);
        println!(
            "{event:?} offset={offset} overscroll={} phase={:?} effects={effects:?}",
            m.overscroll_distance(),
            t.phase()
        );
    }
}
