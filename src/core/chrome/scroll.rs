use crate::domain::ports::PageView;
use std::collections::HashSet;
use std::time::Duration;
use tokio::time::{interval_at, Instant};

pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;
pub const ANCHOR_OFFSET_PX: f64 = 20.0;
pub const COUNTER_STEPS: u32 = 50;
pub const COUNTER_INTERVAL: Duration = Duration::from_millis(30);
pub const REVEAL_CLASS: &str = "animate-in";

/// Header shadow once the page is scrolled past a threshold.
pub struct HeaderScroll {
    threshold: f64,
    scrolled: bool,
}

impl HeaderScroll {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Scroll event. The view only hears about state changes.
    pub fn on_scroll<V: PageView>(&mut self, scroll_y: f64, view: &mut V) {
        let scrolled = scroll_y > self.threshold;
        if scrolled != self.scrolled {
            self.scrolled = scrolled;
            view.set_header_scrolled(scrolled);
        }
    }
}

/// Entrance animation applied the first time an element becomes visible.
#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<String>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the element was revealed by this call.
    pub fn on_visible<V: PageView>(&mut self, element: &str, view: &mut V) -> bool {
        if !self.revealed.insert(element.to_string()) {
            return false;
        }
        view.add_class(element, REVEAL_CLASS);
        true
    }

    pub fn is_revealed(&self, element: &str) -> bool {
        self.revealed.contains(element)
    }
}

/// Count-up from zero to the number shown in a stat element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterAnimation {
    target: u64,
    suffix: String,
    steps: u32,
}

impl CounterAnimation {
    /// "10,000+" counts to 10000 and keeps "+". Text without digits is not
    /// animated.
    pub fn parse(text: &str, steps: u32) -> Option<Self> {
        let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
        let target = digits.parse::<u64>().ok()?;
        let suffix = text
            .chars()
            .filter(|c| !c.is_ascii_digit() && *c != ',')
            .collect();

        Some(Self {
            target,
            suffix,
            steps: steps.max(1),
        })
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Text for frame `step` (1-based). Each frame advances by `target/steps`
    /// and is floored; the last one lands exactly on the target.
    pub fn frame(&self, step: u32) -> String {
        let step = u128::from(step.min(self.steps));
        // 中間乘積可能超過 u64，結果不會大於 target
        let value = u128::from(self.target) * step / u128::from(self.steps);
        format!("{}{}", value, self.suffix)
    }

    pub fn frames(&self) -> impl Iterator<Item = String> + '_ {
        (1..=self.steps).map(|step| self.frame(step))
    }

    /// Writes one frame per tick into `element`, first frame one period in.
    pub async fn run<V: PageView>(&self, element: &str, view: &mut V, period: Duration) {
        let mut ticker = interval_at(Instant::now() + period, period);
        for text in self.frames() {
            ticker.tick().await;
            view.set_text(element, &text);
        }
    }
}

/// Stat counters that run at most once per element.
#[derive(Debug)]
pub struct StatsCounter {
    steps: u32,
    period: Duration,
    counted: HashSet<String>,
}

impl StatsCounter {
    pub fn new(steps: u32, period: Duration) -> Self {
        Self {
            steps,
            period,
            counted: HashSet::new(),
        }
    }

    /// The element scrolled into view. Returns the animation to play, or
    /// `None` when it already ran or the text holds no number.
    pub fn on_visible(&mut self, element: &str, text: &str) -> Option<CounterAnimation> {
        if self.counted.contains(element) {
            return None;
        }
        let animation = CounterAnimation::parse(text, self.steps)?;
        self.counted.insert(element.to_string());
        Some(animation)
    }

    pub async fn animate<V: PageView>(&mut self, element: &str, text: &str, view: &mut V) -> bool {
        match self.on_visible(element, text) {
            Some(animation) => {
                animation.run(element, view, self.period).await;
                true
            }
            None => false,
        }
    }

    pub fn is_counted(&self, element: &str) -> bool {
        self.counted.contains(element)
    }
}

/// Scroll position for an in-page link. Only `#id` hrefs with a known target
/// scroll; `offset_of` resolves an element id to its document offset.
pub fn anchor_target(
    href: &str,
    header_height: f64,
    offset: f64,
    offset_of: impl Fn(&str) -> Option<f64>,
) -> Option<f64> {
    let id = href.strip_prefix('#').filter(|id| !id.is_empty())?;
    let top = offset_of(id)?;
    Some(top - header_height - offset)
}
