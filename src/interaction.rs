use crate::host::{GradientHost, PointerState};
use crate::model::{Channel, GradientState, MarkerId, MarkerList};
use crate::render::{self, GradientLayout, HandleMarker, MarkerRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerRef {
    pub channel: Channel,
    pub id: MarkerId,
}

/// Selection and drag state for one gradient editor. Owned by the caller and
/// handed to the editor every frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    selected: Option<MarkerRef>,
    dragging: Option<MarkerRef>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<MarkerRef> {
        self.selected
    }

    pub fn dragging(&self) -> Option<MarkerRef> {
        self.dragging
    }

    pub fn select(&mut self, channel: Channel, id: MarkerId) {
        self.selected = Some(MarkerRef { channel, id });
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Current slot of the selected marker. `None` if nothing is selected or
    /// the marker no longer exists.
    pub fn selected_index(&self, gradient: &GradientState) -> Option<(Channel, usize)> {
        self.selected.and_then(|marker| index_of(gradient, marker))
    }

    pub fn dragging_index(&self, gradient: &GradientState) -> Option<(Channel, usize)> {
        self.dragging.and_then(|marker| index_of(gradient, marker))
    }

    /// Removes the selected marker from `gradient` and forgets it.
    pub fn remove_selected(&mut self, gradient: &mut GradientState) -> bool {
        let Some(selected) = self.selected.take() else {
            return false;
        };
        if self.dragging == Some(selected) {
            self.dragging = None;
        }
        gradient.remove_marker_by_id(selected.channel, selected.id)
    }

    /// Drops references to markers that were removed behind our back.
    fn prune(&mut self, gradient: &GradientState) {
        if self.selected.is_some_and(|m| index_of(gradient, m).is_none()) {
            self.selected = None;
        }
        if self.dragging.is_some_and(|m| index_of(gradient, m).is_none()) {
            self.dragging = None;
        }
    }
}

fn index_of(gradient: &GradientState, marker: MarkerRef) -> Option<(Channel, usize)> {
    let index = match marker.channel {
        Channel::Color => gradient.colors().index_of(marker.id),
        Channel::Alpha => gradient.alphas().index_of(marker.id),
    }?;
    Some((marker.channel, index))
}

/// Runs one frame of the editor against `host`: draws both handle rows and
/// the bar, applies selection, dragging and click-to-insert.
///
/// Returns true if the gradient changed this frame.
pub fn update_gradient<H: GradientHost>(
    host: &mut H,
    gradient: &mut GradientState,
    interaction: &mut InteractionState,
    layout: &GradientLayout,
) -> bool {
    let pointer = host.pointer();
    interaction.prune(gradient);

    let alpha_row = layout.alpha_row();
    let alphas = update_row(
        host,
        gradient.alphas_mut(),
        interaction,
        Channel::Alpha,
        &alpha_row,
        &pointer,
    );
    let mut changed = alphas.moved;
    if !alphas.handle_hovered {
        changed |= insert_on_click(host, gradient, interaction, Channel::Alpha, &alpha_row);
    }

    render::draw_bar(host, gradient, layout);

    let color_row = layout.color_row();
    let colors = update_row(
        host,
        gradient.colors_mut(),
        interaction,
        Channel::Color,
        &color_row,
        &pointer,
    );
    changed |= colors.moved;
    if !colors.handle_hovered {
        changed |= insert_on_click(host, gradient, interaction, Channel::Color, &color_row);
    }

    changed
}

struct RowOutcome {
    moved: bool,
    handle_hovered: bool,
}

/// Handles of one channel: draw, pick, drag, then resort if this channel is
/// being dragged.
fn update_row<H, M>(
    host: &mut H,
    markers: &mut MarkerList<M>,
    interaction: &mut InteractionState,
    channel: Channel,
    row: &MarkerRow,
    pointer: &PointerState,
) -> RowOutcome
where
    H: GradientHost,
    M: HandleMarker,
{
    let mut outcome = RowOutcome {
        moved: false,
        handle_hovered: false,
    };

    for index in 0..markers.len() {
        let (Some(id), Some(marker)) = (markers.id_at(index), markers.get(index).copied()) else {
            continue;
        };
        let target = MarkerRef { channel, id };
        let rect = row.handle_rect(marker.position());

        render::draw_handle(
            host,
            rect,
            row.direction,
            marker.handle_color(),
            interaction.selected == Some(target),
        );

        let hovered = host.is_hovered(rect);
        outcome.handle_hovered |= hovered;

        if interaction.dragging.is_none() && hovered && pointer.primary_pressed {
            log::debug!("picked {} marker {} at {:.3}", channel, index, marker.position());
            interaction.selected = Some(target);
            interaction.dragging = Some(target);
        }

        if !pointer.primary_down {
            interaction.dragging = None;
        }

        if interaction.dragging == Some(target)
            && pointer.is_dragging()
            && let Some(marker) = markers.get_mut(index)
        {
            marker.set_position(marker.position() + pointer.delta.x / row.width);
            outcome.moved = true;
        }
    }

    if interaction.dragging.is_some_and(|m| m.channel == channel) {
        markers.resort();
    }

    outcome
}

/// A fresh press on the empty part of a row adds a marker there, carrying the
/// value the gradient already has at that spot.
fn insert_on_click<H: GradientHost>(
    host: &mut H,
    gradient: &mut GradientState,
    interaction: &InteractionState,
    channel: Channel,
    row: &MarkerRow,
) -> bool {
    let pointer = host.pointer();
    if interaction.dragging.is_some() || !pointer.primary_pressed {
        return false;
    }
    let Some(pos) = pointer.pos else {
        return false;
    };
    if !host.is_hovered(row.track_rect()) {
        return false;
    }

    gradient
        .insert_sampled(channel, row.position_at(pos.x))
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::mock::{DrawCommand, MockHost};
    use crate::model::Positioned;
    use eframe::egui::{Pos2, pos2, vec2};

    // alpha row y 0..15, bar 15..35, color row 35..50, x 0..100
    fn layout() -> GradientLayout {
        GradientLayout {
            origin: pos2(0.0, 0.0),
            width: 100.0,
            bar_height: 20.0,
            marker_size: vec2(10.0, 15.0),
            checker_size: 10.0,
        }
    }

    const ALPHA_Y: f32 = 7.0;
    const BAR_Y: f32 = 25.0;
    const COLOR_Y: f32 = 42.0;

    fn alpha_gradient() -> GradientState {
        let mut gradient = GradientState::new();
        gradient.add_alpha_marker(0.2, 0.1);
        gradient.add_alpha_marker(0.6, 0.9);
        gradient
    }

    fn frame(
        host: &mut MockHost,
        gradient: &mut GradientState,
        state: &mut InteractionState,
    ) -> bool {
        host.commands.clear();
        update_gradient(host, gradient, state, &layout())
    }

    #[test]
    fn pressing_a_handle_selects_and_starts_drag() {
        let mut gradient = alpha_gradient();
        let mut state = InteractionState::new();
        let mut host = MockHost::default();

        host.press(pos2(20.0, ALPHA_Y));
        frame(&mut host, &mut gradient, &mut state);

        assert_eq!(state.selected_index(&gradient), Some((Channel::Alpha, 0)));
        assert_eq!(state.dragging_index(&gradient), Some((Channel::Alpha, 0)));
        assert_eq!(gradient.alpha_count(), 2);
    }

    #[test]
    fn dragging_past_a_neighbor_keeps_selection_on_dragged_marker() {
        let mut gradient = alpha_gradient();
        let mut state = InteractionState::new();
        let mut host = MockHost::default();

        host.press(pos2(20.0, ALPHA_Y));
        frame(&mut host, &mut gradient, &mut state);
        host.drag_to(pos2(70.0, ALPHA_Y));
        assert!(frame(&mut host, &mut gradient, &mut state));

        let (channel, index) = state.selected_index(&gradient).unwrap();
        assert_eq!((channel, index), (Channel::Alpha, 1));
        let dragged = gradient.alpha_marker(index).unwrap();
        assert!((dragged.position - 0.7).abs() < 1e-6);
        assert_eq!(dragged.alpha, 0.1);
        assert_eq!(gradient.alpha_marker(0).unwrap().position, 0.6);
        assert_eq!(state.dragging_index(&gradient), Some((Channel::Alpha, 1)));
    }

    #[test]
    fn drag_is_clamped_to_unit_range() {
        let mut gradient = alpha_gradient();
        let mut state = InteractionState::new();
        let mut host = MockHost::default();

        host.press(pos2(60.0, ALPHA_Y));
        frame(&mut host, &mut gradient, &mut state);
        host.drag_to(pos2(400.0, ALPHA_Y));
        frame(&mut host, &mut gradient, &mut state);

        let (_, index) = state.selected_index(&gradient).unwrap();
        assert_eq!(gradient.alpha_marker(index).unwrap().position(), 1.0);

        host.drag_to(pos2(-400.0, ALPHA_Y));
        frame(&mut host, &mut gradient, &mut state);
        let (_, index) = state.selected_index(&gradient).unwrap();
        assert_eq!(index, 0);
        assert_eq!(gradient.alpha_marker(index).unwrap().position(), 0.0);
    }

    #[test]
    fn release_ends_drag_but_keeps_selection() {
        let mut gradient = alpha_gradient();
        let mut state = InteractionState::new();
        let mut host = MockHost::default();

        host.press(pos2(20.0, ALPHA_Y));
        frame(&mut host, &mut gradient, &mut state);
        host.release();
        frame(&mut host, &mut gradient, &mut state);

        assert!(state.dragging().is_none());
        assert_eq!(state.selected_index(&gradient), Some((Channel::Alpha, 0)));

        // moving without the button does not move the marker
        host.pointer.delta = vec2(30.0, 0.0);
        assert!(!frame(&mut host, &mut gradient, &mut state));
        assert_eq!(gradient.alpha_marker(0).unwrap().position, 0.2);
    }

    #[test]
    fn removed_marker_is_dropped_from_selection() {
        let mut gradient = alpha_gradient();
        let mut state = InteractionState::new();
        let mut host = MockHost::default();

        host.press(pos2(20.0, ALPHA_Y));
        frame(&mut host, &mut gradient, &mut state);
        assert!(gradient.remove_alpha_marker(0));

        host.drag_to(pos2(30.0, ALPHA_Y));
        frame(&mut host, &mut gradient, &mut state);
        assert!(state.selected().is_none());
        assert!(state.dragging().is_none());
        assert_eq!(gradient.alpha_marker(0).unwrap().position, 0.6);
    }

    #[test]
    fn clicking_empty_alpha_track_inserts_sampled_marker() {
        let mut gradient = alpha_gradient();
        let mut state = InteractionState::new();
        let mut host = MockHost::default();
        let expected = gradient.evaluate_alpha(0.4);

        host.press(pos2(40.0, ALPHA_Y));
        assert!(frame(&mut host, &mut gradient, &mut state));

        assert_eq!(gradient.alpha_count(), 3);
        let inserted = gradient.alpha_marker(1).unwrap();
        assert_eq!(inserted.position, 0.4);
        assert!((inserted.alpha - expected).abs() < 1e-6);
        assert_eq!(gradient.color_count(), 0);
        assert!(state.selected().is_none());
    }

    #[test]
    fn clicking_empty_color_track_inserts_sampled_marker() {
        let mut gradient = GradientState::new();
        gradient.add_color_marker(0.0, [1.0, 0.0, 0.0], 1.0);
        gradient.add_color_marker(1.0, [0.0, 0.0, 1.0], 2.0);
        let mut state = InteractionState::new();
        let mut host = MockHost::default();

        host.press(pos2(50.0, COLOR_Y));
        frame(&mut host, &mut gradient, &mut state);

        assert_eq!(gradient.color_count(), 3);
        let inserted = gradient.color_marker(1).unwrap();
        assert_eq!(inserted.color, [0.5, 0.0, 0.5]);
        assert_eq!(inserted.intensity, 1.5);
    }

    #[test]
    fn clicking_a_handle_or_the_bar_does_not_insert() {
        let mut gradient = alpha_gradient();
        let mut state = InteractionState::new();
        let mut host = MockHost::default();

        host.press(pos2(22.0, ALPHA_Y));
        frame(&mut host, &mut gradient, &mut state);
        host.release();
        frame(&mut host, &mut gradient, &mut state);
        assert_eq!(gradient.alpha_count(), 2);

        host.press(pos2(40.0, BAR_Y));
        assert!(!frame(&mut host, &mut gradient, &mut state));
        assert_eq!(gradient.alpha_count(), 2);
        assert_eq!(gradient.color_count(), 0);
    }

    #[test]
    fn holding_the_button_does_not_insert_repeatedly() {
        let mut gradient = alpha_gradient();
        let mut state = InteractionState::new();
        let mut host = MockHost::default();

        host.press(pos2(40.0, ALPHA_Y));
        frame(&mut host, &mut gradient, &mut state);
        host.drag_to(pos2(41.0, ALPHA_Y));
        frame(&mut host, &mut gradient, &mut state);

        assert_eq!(gradient.alpha_count(), 3);
    }

    #[test]
    fn full_channel_skips_click_insert() {
        let mut gradient = GradientState::with_capacity(2);
        gradient.add_alpha_marker(0.2, 1.0);
        gradient.add_alpha_marker(0.6, 1.0);
        let mut state = InteractionState::new();
        let mut host = MockHost::default();

        host.press(pos2(40.0, ALPHA_Y));
        assert!(!frame(&mut host, &mut gradient, &mut state));
        assert_eq!(gradient.alpha_count(), 2);
    }

    #[test]
    fn remove_selected_forgets_the_marker() {
        let mut gradient = alpha_gradient();
        let mut state = InteractionState::new();
        let mut host = MockHost::default();

        host.press(pos2(60.0, ALPHA_Y));
        frame(&mut host, &mut gradient, &mut state);

        assert!(state.remove_selected(&mut gradient));
        assert_eq!(gradient.alpha_count(), 1);
        assert_eq!(gradient.alpha_marker(0).unwrap().position, 0.2);
        assert!(state.selected().is_none());
        assert!(state.dragging().is_none());
        assert!(!state.remove_selected(&mut gradient));
    }

    fn two_channel_gradient() -> GradientState {
        let mut gradient = alpha_gradient();
        gradient.add_color_marker(0.2, [1.0, 0.0, 0.0], 3.0);
        gradient.add_color_marker(0.6, [0.0, 0.0, 1.0], 1.0);
        gradient
    }

    #[test]
    fn color_handles_point_up_below_the_bar() {
        let mut gradient = two_channel_gradient();
        let mut state = InteractionState::new();
        let mut host = MockHost::default();

        frame(&mut host, &mut gradient, &mut state);

        let tips: Vec<Pos2> = host
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Triangle(points, _) => Some(points[0]),
                _ => None,
            })
            .collect();
        assert!(tips.contains(&pos2(20.0, 35.0)));
        assert!(tips.contains(&pos2(20.0, 15.0)));
    }

    #[test]
    fn dragging_a_color_handle_resorts_the_color_channel() {
        let mut gradient = two_channel_gradient();
        let red = gradient.colors().id_at(0).unwrap();
        let mut state = InteractionState::new();
        let mut host = MockHost::default();

        host.press(pos2(20.0, COLOR_Y));
        frame(&mut host, &mut gradient, &mut state);
        assert_eq!(state.selected_index(&gradient), Some((Channel::Color, 0)));

        host.drag_to(pos2(70.0, COLOR_Y));
        assert!(frame(&mut host, &mut gradient, &mut state));

        assert_eq!(state.selected_index(&gradient), Some((Channel::Color, 1)));
        assert_eq!(gradient.colors().index_of(red), Some(1));
        let dragged = gradient.color_marker(1).unwrap();
        assert!((dragged.position - 0.7).abs() < 1e-6);
        assert_eq!(dragged.color, [1.0, 0.0, 0.0]);
        assert_eq!(dragged.intensity, 3.0);
        assert_eq!(gradient.color_marker(0).unwrap().color, [0.0, 0.0, 1.0]);

        // alpha channel untouched
        assert_eq!(gradient.alpha_marker(0).unwrap().position, 0.2);
        assert_eq!(gradient.alpha_marker(1).unwrap().position, 0.6);
    }

    #[test]
    fn alpha_drag_leaves_color_slots_alone() {
        let mut gradient = two_channel_gradient();
        // color channel transiently out of order, as after a live edit
        gradient.colors_mut().get_mut(0).unwrap().set_position(0.9);
        let colors_before = gradient.colors().as_slice().to_vec();
        let mut state = InteractionState::new();
        let mut host = MockHost::default();

        host.press(pos2(20.0, ALPHA_Y));
        frame(&mut host, &mut gradient, &mut state);
        host.drag_to(pos2(70.0, ALPHA_Y));
        frame(&mut host, &mut gradient, &mut state);

        assert_eq!(state.selected_index(&gradient), Some((Channel::Alpha, 1)));
        assert_eq!(gradient.colors().as_slice(), colors_before.as_slice());
        assert!(!gradient.colors().is_sorted());
    }

    #[test]
    fn active_drag_blocks_pickup_in_the_other_row() {
        let mut gradient = two_channel_gradient();
        let mut state = InteractionState::new();
        let mut host = MockHost::default();

        host.press(pos2(20.0, ALPHA_Y));
        frame(&mut host, &mut gradient, &mut state);

        // a second press report on a color handle while the alpha drag is live
        host.press(pos2(60.0, COLOR_Y));
        assert!(!frame(&mut host, &mut gradient, &mut state));

        assert_eq!(state.selected_index(&gradient), Some((Channel::Alpha, 0)));
        assert_eq!(state.dragging_index(&gradient), Some((Channel::Alpha, 0)));
        assert_eq!(gradient.color_count(), 2);
        assert_eq!(gradient.alpha_count(), 2);
    }

    #[test]
    fn programmatic_selection_is_outlined_without_dragging() {
        let mut gradient = two_channel_gradient();
        let blue = gradient.colors().id_at(1).unwrap();
        let mut state = InteractionState::new();
        state.select(Channel::Color, blue);
        let mut host = MockHost::default();

        frame(&mut host, &mut gradient, &mut state);

        assert_eq!(state.selected_index(&gradient), Some((Channel::Color, 1)));
        assert!(state.dragging().is_none());
        let selected_outline = eframe::egui::Color32::from_rgb(0, 0, 255);
        assert!(host.commands.iter().any(|c| matches!(
            c,
            DrawCommand::Triangle(points, color)
                if *color == selected_outline && points[0] == pos2(60.0, 35.0)
        )));
    }

    #[test]
    fn selected_handle_is_drawn_with_selection_outline() {
        let mut gradient = alpha_gradient();
        let mut state = InteractionState::new();
        let mut host = MockHost::default();

        host.press(pos2(20.0, ALPHA_Y));
        frame(&mut host, &mut gradient, &mut state);
        host.release();
        frame(&mut host, &mut gradient, &mut state);

        let selected_outline = eframe::egui::Color32::from_rgb(0, 0, 255);
        let highlighted = host
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Triangle(_, color) if *color == selected_outline))
            .count();
        assert_eq!(highlighted, 1);
    }
}
