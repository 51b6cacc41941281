//! Animation Timeline
//!
//! Entrance effects are described as explicit steps of
//! `{delay, duration, easing, property deltas}` and rendered to CSS start/end
//! styles plus `transition` declarations, so the browser's own transition
//! engine does the interpolation. `sample` evaluates the same curves in Rust
//! for anything that needs the value at a given instant.

use std::fmt::Write as _;
use std::time::Duration;

/// Timing curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Cubic ease-out, steeper than `EaseOut`
    Power2Out,
}

impl Easing {
    /// Map linear progress in `[0, 1]` to eased progress
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::Power2Out => 1.0 - (1.0 - t).powi(3),
        }
    }

    /// CSS timing function
    pub fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "cubic-bezier(0.42, 0, 1, 1)",
            Easing::EaseOut => "cubic-bezier(0, 0, 0.58, 1)",
            Easing::EaseInOut => "cubic-bezier(0.42, 0, 0.58, 1)",
            Easing::Power2Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
        }
    }
}

/// Animatable property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Opacity,
    /// Horizontal offset in px
    TranslateX,
    /// Vertical offset in px
    TranslateY,
    /// Horizontal offset in percent of the element's own width
    SlideX,
    Scale,
    /// Width in percent of the container
    Width,
}

impl Property {
    fn css_property(self) -> &'static str {
        match self {
            Property::Opacity => "opacity",
            Property::TranslateX | Property::TranslateY | Property::SlideX | Property::Scale => {
                "transform"
            }
            Property::Width => "width",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyDelta {
    pub property: Property,
    pub from: f64,
    pub to: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Once,
    /// Runs from -> to -> from every cycle, indefinitely
    Forever,
}

/// One animated element
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub delay: Duration,
    pub duration: Duration,
    pub easing: Easing,
    pub deltas: Vec<PropertyDelta>,
    pub repeat: Repeat,
}

impl Step {
    pub fn new(duration: Duration) -> Self {
        Self {
            delay: Duration::ZERO,
            duration,
            easing: Easing::EaseOut,
            deltas: Vec::new(),
            repeat: Repeat::Once,
        }
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn animate(mut self, property: Property, from: f64, to: f64) -> Self {
        self.deltas.push(PropertyDelta { property, from, to });
        self
    }

    pub fn forever(mut self) -> Self {
        self.repeat = Repeat::Forever;
        self
    }

    /// When the step settles, `None` if it never does
    pub fn end(&self) -> Option<Duration> {
        match self.repeat {
            Repeat::Once => Some(self.delay + self.duration),
            Repeat::Forever => None,
        }
    }

    /// Eased progress at `elapsed` since the timeline started
    pub fn progress(&self, elapsed: Duration) -> f64 {
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return self.easing.apply(1.0);
        }
        let linear = active.as_secs_f64() / self.duration.as_secs_f64();
        match self.repeat {
            Repeat::Once => self.easing.apply(linear),
            Repeat::Forever => {
                let phase = linear.fract();
                let there_and_back = if phase < 0.5 {
                    phase * 2.0
                } else {
                    2.0 - phase * 2.0
                };
                self.easing.apply(there_and_back)
            }
        }
    }

    /// Property values at `elapsed`
    pub fn sample(&self, elapsed: Duration) -> Vec<(Property, f64)> {
        let p = self.progress(elapsed);
        self.deltas
            .iter()
            .map(|d| (d.property, d.from + (d.to - d.from) * p))
            .collect()
    }

    pub fn start_style(&self) -> String {
        render_style(self.deltas.iter().map(|d| (d.property, d.from)))
    }

    pub fn end_style(&self) -> String {
        render_style(self.deltas.iter().map(|d| (d.property, d.to)))
    }

    /// `transition` declaration that carries start_style to end_style
    pub fn transition(&self) -> String {
        let mut seen: Vec<&'static str> = Vec::new();
        for d in &self.deltas {
            let name = d.property.css_property();
            if !seen.contains(&name) {
                seen.push(name);
            }
        }
        let parts: Vec<String> = seen
            .iter()
            .map(|name| {
                format!(
                    "{} {}ms {} {}ms",
                    name,
                    self.duration.as_millis(),
                    self.easing.css(),
                    self.delay.as_millis()
                )
            })
            .collect();
        format!("transition: {};", parts.join(", "))
    }

    /// `animation` declaration for a repeating step bound to CSS keyframes
    pub fn animation(&self, keyframes: &str) -> String {
        let iterations = match self.repeat {
            Repeat::Once => "1",
            Repeat::Forever => "infinite",
        };
        format!(
            "animation: {} {}ms {} {}ms {};",
            keyframes,
            self.duration.as_millis(),
            self.easing.css(),
            self.delay.as_millis(),
            iterations
        )
    }

    /// `@keyframes` rule matching [`Step::animation`]; ping-pong steps peak mid-cycle
    pub fn keyframes(&self, name: &str) -> String {
        match self.repeat {
            Repeat::Once => format!(
                "@keyframes {} {{ from {{ {} }} to {{ {} }} }}",
                name,
                self.start_style(),
                self.end_style()
            ),
            Repeat::Forever => format!(
                "@keyframes {} {{ 0%, 100% {{ {} }} 50% {{ {} }} }}",
                name,
                self.start_style(),
                self.end_style()
            ),
        }
    }
}

fn render_style(values: impl Iterator<Item = (Property, f64)>) -> String {
    let mut style = String::new();
    let mut transforms: Vec<String> = Vec::new();

    for (property, value) in values {
        match property {
            Property::Opacity => {
                let _ = write!(style, "opacity: {}; ", value);
            }
            Property::Width => {
                let _ = write!(style, "width: {}%; ", value);
            }
            Property::TranslateX => transforms.push(format!("translateX({}px)", value)),
            Property::TranslateY => transforms.push(format!("translateY({}px)", value)),
            Property::SlideX => transforms.push(format!("translateX({}%)", value)),
            Property::Scale => transforms.push(format!("scale({})", value)),
        }
    }

    if !transforms.is_empty() {
        let _ = write!(style, "transform: {}; ", transforms.join(" "));
    }
    style.trim_end().to_string()
}

/// Ordered steps played against one clock
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Timeline {
    steps: Vec<Step>,
}

impl Timeline {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// `count` copies of `template`, the i-th delayed by
    /// `delay_children + i * interval` on top of the template's own delay
    pub fn stagger(
        count: usize,
        template: &Step,
        delay_children: Duration,
        interval: Duration,
    ) -> Self {
        let steps = (0..count)
            .map(|i| {
                let mut step = template.clone();
                step.delay = template.delay + delay_children + interval * i as u32;
                step
            })
            .collect();
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn sample(&self, index: usize, elapsed: Duration) -> Vec<(Property, f64)> {
        self.steps
            .get(index)
            .map(|s| s.sample(elapsed))
            .unwrap_or_default()
    }

    /// Time until every step has settled; `None` if one repeats forever
    pub fn total_duration(&self) -> Option<Duration> {
        self.steps
            .iter()
            .try_fold(Duration::ZERO, |acc, s| s.end().map(|end| acc.max(end)))
    }
}

/// Stock entrance effects
pub mod presets {
    use super::*;

    /// Child rising into place: y 20 -> 0, fade in, 500 ms
    pub fn rise_in() -> Step {
        Step::new(Duration::from_millis(500))
            .easing(Easing::EaseOut)
            .animate(Property::TranslateY, 20.0, 0.0)
            .animate(Property::Opacity, 0.0, 1.0)
    }

    /// Page title dropping into place
    pub fn drop_in() -> Step {
        Step::new(Duration::from_millis(300))
            .easing(Easing::EaseOut)
            .animate(Property::TranslateY, -20.0, 0.0)
            .animate(Property::Opacity, 0.0, 1.0)
    }

    pub fn fade_in() -> Step {
        Step::new(Duration::from_millis(300))
            .easing(Easing::EaseOut)
            .animate(Property::Opacity, 0.0, 1.0)
    }

    /// Staggered rise-in for a list of `count` children
    pub fn stagger_children(
        count: usize,
        delay_children: Duration,
        interval: Duration,
    ) -> Timeline {
        Timeline::stagger(count, &rise_in(), delay_children, interval)
    }

    /// Splash title, one step per character, 100 ms apart
    pub fn splash_letters(text: &str) -> Timeline {
        let letter = Step::new(Duration::from_millis(500))
            .easing(Easing::Power2Out)
            .animate(Property::TranslateY, 20.0, 0.0)
            .animate(Property::Opacity, 0.0, 1.0);
        Timeline::stagger(
            text.chars().count(),
            &letter,
            Duration::ZERO,
            Duration::from_millis(100),
        )
    }

    /// Splash progress bar filling over 1500 ms
    pub fn splash_progress() -> Step {
        Step::new(Duration::from_millis(1500))
            .easing(Easing::EaseInOut)
            .animate(Property::Width, 0.0, 100.0)
    }

    /// Splash caption pulsing between 0.2 and 1 opacity
    pub fn splash_caption() -> Step {
        Step::new(Duration::from_millis(1500))
            .easing(Easing::EaseInOut)
            .animate(Property::Opacity, 0.2, 1.0)
            .forever()
    }

    /// Preference dialog sliding up into view
    pub fn modal_enter() -> Step {
        Step::new(Duration::from_millis(400))
            .easing(Easing::EaseOut)
            .animate(Property::TranslateY, 50.0, 0.0)
            .animate(Property::Opacity, 0.0, 1.0)
    }

    /// Mobile menu sliding in from the right edge
    pub fn menu_slide_in() -> Step {
        Step::new(Duration::from_millis(300))
            .easing(Easing::EaseOut)
            .animate(Property::SlideX, 100.0, 0.0)
            .animate(Property::Opacity, 0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::presets::*;
    use super::*;

    const ALL_EASINGS: [Easing; 5] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::Power2Out,
    ];

    #[test]
    fn test_easing_endpoints_and_clamping() {
        for easing in ALL_EASINGS {
            assert!(easing.apply(0.0).abs() < 1e-9, "{:?}", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{:?}", easing);
            assert_eq!(easing.apply(-3.0), easing.apply(0.0));
            assert_eq!(easing.apply(7.0), easing.apply(1.0));
        }
    }

    #[test]
    fn test_easing_is_monotonic() {
        for easing in ALL_EASINGS {
            let mut last = 0.0;
            for i in 0..=100 {
                let v = easing.apply(i as f64 / 100.0);
                assert!(v + 1e-12 >= last, "{:?} dipped at {}", easing, i);
                last = v;
            }
        }
    }

    #[test]
    fn test_step_sample_respects_delay() {
        let step = rise_in().delay(Duration::from_millis(200));

        let before = step.sample(Duration::from_millis(100));
        assert_eq!(before, vec![(Property::TranslateY, 20.0), (Property::Opacity, 0.0)]);

        let after = step.sample(Duration::from_millis(700));
        assert_eq!(after, vec![(Property::TranslateY, 0.0), (Property::Opacity, 1.0)]);

        assert_eq!(step.end(), Some(Duration::from_millis(700)));
    }

    #[test]
    fn test_forever_step_pulses() {
        let caption = splash_caption();
        assert_eq!(caption.end(), None);

        let at = |ms| caption.sample(Duration::from_millis(ms))[0].1;
        assert!((at(0) - 0.2).abs() < 1e-9);
        assert!((at(750) - 1.0).abs() < 1e-9);
        assert!((at(1500) - 0.2).abs() < 1e-9);
        assert!((at(2250) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_stagger_offsets() {
        let timeline = stagger_children(3, Duration::from_millis(300), Duration::from_millis(200));
        let delays: Vec<u128> = timeline.steps().iter().map(|s| s.delay.as_millis()).collect();
        assert_eq!(delays, vec![300, 500, 700]);
        assert_eq!(timeline.total_duration(), Some(Duration::from_millis(1200)));
    }

    #[test]
    fn test_splash_letters() {
        let letters = splash_letters("PORTFOLIO");
        assert_eq!(letters.len(), 9);
        assert_eq!(letters.step(8).unwrap().delay, Duration::from_millis(800));
        assert_eq!(letters.total_duration(), Some(Duration::from_millis(1300)));
        assert!(letters.sample(9, Duration::ZERO).is_empty());
    }

    #[test]
    fn test_total_duration_none_when_forever() {
        let timeline = Timeline::new(vec![splash_progress(), splash_caption()]);
        assert_eq!(timeline.total_duration(), None);
        assert_eq!(Timeline::default().total_duration(), Some(Duration::ZERO));
    }

    #[test]
    fn test_css_rendering() {
        let step = rise_in().delay(Duration::from_millis(100));
        assert_eq!(step.start_style(), "opacity: 0; transform: translateY(20px);");
        assert_eq!(step.end_style(), "opacity: 1; transform: translateY(0px);");
        assert_eq!(
            step.transition(),
            "transition: transform 500ms cubic-bezier(0, 0, 0.58, 1) 100ms, \
             opacity 500ms cubic-bezier(0, 0, 0.58, 1) 100ms;"
        );

        assert_eq!(splash_progress().end_style(), "width: 100%;");
        assert!(splash_caption()
            .animation("folio-pulse")
            .ends_with("0ms infinite;"));
    }

    #[test]
    fn test_keyframes() {
        assert_eq!(
            splash_caption().keyframes("folio-pulse"),
            "@keyframes folio-pulse { 0%, 100% { opacity: 0.2; } 50% { opacity: 1; } }"
        );
        assert_eq!(
            fade_in().keyframes("fade"),
            "@keyframes fade { from { opacity: 0; } to { opacity: 1; } }"
        );
    }
}
