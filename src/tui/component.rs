use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components follow a props-and-state pattern:
/// - Data flows in via props (struct fields set before the draw).
/// - Presentation state (cursor position, list selection) stays inside
///   the component.
/// - They render to a `Frame` within a given `Rect`.
///
/// # Mutability
///
/// `render` takes `&mut self` so a component can update internal state
/// (e.g. the input box's horizontal scroll) during the render pass.
/// This aligns with Ratatui's `StatefulWidget` pattern.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
