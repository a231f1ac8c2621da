use pullup_adapter::{BottomPullController, InsetAnimator, ScrollMetrics, ScrollSurface};

/// A fake list view: real hosts map these calls onto their scroll container.
struct SimList {
    metrics: ScrollMetrics,
    inset: InsetAnimator,
    footer: Option<&'static str>,
    now_ms: u64,
}

impl ScrollSurface for SimList {
    type Footer = &'static str;

    fn scroll_metrics(&self) -> ScrollMetrics {
        self.metrics.with_insets(0.0, self.inset.value())
    }

    fn set_bottom_inset(&mut self, value: f32, animated: bool, duration_ms: u64) {
        if animated {
            self.inset.animate_to(value, self.now_ms, duration_ms);
        } else {
            self.inset.set_immediate(value);
        }
    }

    fn attach_footer(&mut self, footer: &&'static str) {
        println!("  attach footer {footer:?}");
        self.footer = Some(*footer);
    }

    fn detach_footer(&mut self, duration_ms: u64) {
        if self.footer.take().is_some() {
            println!("  detach footer over {duration_ms}ms");
        }
    }
}

fn main() {
    let list = SimList {
        metrics: ScrollMetrics::new(0.0, 2000.0, 600.0),
        inset: InsetAnimator::new(0.0),
        footer: None,
        now_ms: 0,
    };
    let mut c = BottomPullController::new(list, "loading...");
    c.set_delegate(|| println!("  refresh requested"));

    // Drag from the bottom rest (1400) down to 1560, sampling every 16ms.
    c.surface_mut().metrics.content_offset_y = 1400.0;
    c.drag_begin();
    let mut offset = 1400.0;
    while offset < 1560.0 {
        offset += 20.0;
        let s = c.surface_mut();
        s.now_ms += 16;
        s.metrics.content_offset_y = offset;
        c.position_changed();
    }

    println!("release at offset={offset}");
    let refreshed = c.drag_end(false);
    println!("refreshed={refreshed} phase={:?}", c.phase());

    loop {
        let s = c.surface_mut();
        s.now_ms += 16;
        let now_ms = s.now_ms;
        match s.inset.tick(now_ms) {
            Some(v) => println!("  t={now_ms} inset={v:.1}"),
            None => break,
        }
    }
}
