// SPDX-License-Identifier: MPL-2.0
//! Toast widgets.
//!
//! Turns a [`StackLayout`] into an overlay: every card is a layer of an iced
//! `Stack`, pushed away from the anchored corner by its layout offset.

use super::surface::Surface;
use crate::config::Anchor;
use crate::i18n::fluent::I18n;
use crate::toast::{CardPlacement, StackLayout, ToastId, ToastKind, ToastSnapshot, ToastStore};
use crate::ui::design_tokens::{border, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Padding, Shadow, Theme};
use std::collections::HashMap;

/// Interactions emitted by the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Dismiss(ToastId),
    Action(ToastId),
    Undo(ToastId),
    Hovered(bool),
}

/// Accent color and glyph of a toast kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindStyle {
    pub accent: Color,
    pub glyph: &'static str,
}

impl KindStyle {
    #[must_use]
    pub fn of(kind: ToastKind) -> Self {
        match kind {
            ToastKind::Message => Self {
                accent: palette::PRIMARY_500,
                glyph: "i",
            },
            ToastKind::Success => Self {
                accent: palette::SUCCESS_500,
                glyph: "✓",
            },
            ToastKind::Warning => Self {
                accent: palette::WARNING_500,
                glyph: "!",
            },
            ToastKind::Error => Self {
                accent: palette::ERROR_500,
                glyph: "✕",
            },
        }
    }
}

/// Renders the mounted stack, or nothing if the surface is not mounted.
pub fn view_overlay<'a>(surface: &Surface, store: &ToastStore, i18n: &I18n) -> Element<'a, Message> {
    let (Some(anchor), Some(layout)) = (surface.anchor(), surface.layout(store)) else {
        return empty();
    };
    if layout.is_empty() {
        return empty();
    }

    let toasts: HashMap<ToastId, ToastSnapshot> = store
        .snapshot()
        .into_iter()
        .map(|toast| (toast.id, toast))
        .collect();

    let region = stack_region(&layout, &toasts, anchor, i18n);
    let hover_region = mouse_area(region)
        .on_enter(Message::Hovered(true))
        .on_exit(Message::Hovered(false));

    let (align_x, align_y) = corner(anchor);
    Container::new(hover_region)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(align_x)
        .align_y(align_y)
        .padding(spacing::MD)
        .into()
}

fn empty<'a>() -> Element<'a, Message> {
    Container::new(text(""))
        .width(Length::Shrink)
        .height(Length::Shrink)
        .into()
}

fn corner(anchor: Anchor) -> (alignment::Horizontal, alignment::Vertical) {
    let horizontal = if anchor.is_left() {
        alignment::Horizontal::Left
    } else {
        alignment::Horizontal::Right
    };
    let vertical = if anchor.is_top() {
        alignment::Vertical::Top
    } else {
        alignment::Vertical::Bottom
    };
    (horizontal, vertical)
}

/// Height of the drawn pile, used for hit-testing hover.
///
/// `extent` rather than the summed card heights: collapsed cards overlap, so
/// the sum would reach past the oldest visible card.
fn region_height(layout: &StackLayout) -> f32 {
    layout.extent
}

/// Room past the baseline where entering cards wait for their first paint.
fn entrance_lane(layout: &StackLayout) -> f32 {
    layout
        .cards
        .iter()
        .filter(|card| card.entering && card.visible)
        .map(|card| card.translate_y)
        .fold(0.0, f32::max)
}

/// Distance from the anchored edge of the region to the card.
///
/// Shown cards sit `offset` past the lane; entering cards are translated by
/// their own height into the lane, below the stack.
fn edge_distance(placement: &CardPlacement, lane: f32) -> f32 {
    (lane - placement.translate_y).max(0.0)
}

/// Padding that pushes a card `distance` away from the anchored edge.
///
/// Offsets grow upward from a bottom anchor and downward from a top anchor.
fn edge_padding(anchor: Anchor, distance: f32) -> Padding {
    if anchor.is_top() {
        Padding::ZERO.top(distance)
    } else {
        Padding::ZERO.bottom(distance)
    }
}

fn stack_region<'a>(
    layout: &StackLayout,
    toasts: &HashMap<ToastId, ToastSnapshot>,
    anchor: Anchor,
    i18n: &I18n,
) -> Element<'a, Message> {
    let (_, align_y) = corner(anchor);
    let lane = entrance_lane(layout);
    let mut stack = Stack::new()
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .height(Length::Fixed(region_height(layout) + lane));

    for placement in layout.paint_order() {
        let alpha = placement.opacity;
        if alpha <= 0.0 {
            continue;
        }
        let Some(toast) = toasts.get(&placement.id) else {
            continue;
        };
        let layer = Container::new(card(toast, placement, alpha, i18n))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(align_y)
            .padding(edge_padding(anchor, edge_distance(placement, lane)));
        stack = stack.push(layer);
    }
    stack.into()
}

fn card<'a>(
    toast: &ToastSnapshot,
    placement: &CardPlacement,
    alpha: f32,
    i18n: &I18n,
) -> Element<'a, Message> {
    let style = KindStyle::of(toast.kind);
    let id = toast.id;
    let interactive = placement.interactive;

    let glyph = Container::new(
        Text::new(style.glyph)
            .size(typography::BODY_LG)
            .style(move |_: &Theme| text::Style {
                color: Some(fade(style.accent, alpha)),
            }),
    )
    .width(Length::Fixed(sizing::GLYPH_WIDTH));

    let message = Container::new(
        Text::new(toast.text.clone())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(fade(theme.palette().text, alpha)),
            }),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Left);

    let headline = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(glyph)
        .push(message);

    let content: Element<'a, Message> = match &toast.action {
        Some(label) => {
            let controls = Row::new()
                .spacing(spacing::XS)
                .push(
                    button(Text::new(i18n.tr("toast-undo")).size(typography::CAPTION))
                        .on_press_maybe(interactive.then_some(Message::Undo(id)))
                        .style(button::text),
                )
                .push(
                    button(Text::new(label.clone()).size(typography::CAPTION))
                        .on_press_maybe(interactive.then_some(Message::Action(id)))
                        .style(button::primary),
                );
            Column::new()
                .spacing(spacing::XS)
                .push(headline)
                .push(
                    Container::new(controls)
                        .width(Length::Fill)
                        .align_x(alignment::Horizontal::Right),
                )
                .into()
        }
        None => headline
            .push(
                button(Text::new(i18n.tr("toast-dismiss")).size(typography::CAPTION))
                    .on_press_maybe(interactive.then_some(Message::Dismiss(id)))
                    .padding(spacing::XXS)
                    .style(button::text),
            )
            .into(),
    };

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH * placement.scale))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, style.accent, alpha))
        .into()
}

fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Style function for a card, faded by `alpha`.
fn toast_container_style(theme: &Theme, accent: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(fade(bg_color, alpha))),
        border: Border {
            color: fade(accent, alpha),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: Shadow {
            color: fade(shadow::MD.color, alpha * 0.3),
            ..shadow::MD
        },
        text_color: Some(fade(theme.palette().text, alpha)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::ToastKind;

    fn placement(entering: bool, opacity: f32) -> CardPlacement {
        CardPlacement {
            id: ToastId::new(1),
            depth: 0,
            height: 40.0,
            offset: 0.0,
            translate_y: 0.0,
            scale: 1.0,
            opacity,
            z_index: 0,
            visible: opacity > 0.0,
            interactive: opacity > 0.0,
            entering,
        }
    }

    #[test]
    fn every_kind_has_a_distinct_accent() {
        let accents: Vec<Color> = ToastKind::ALL
            .iter()
            .map(|kind| KindStyle::of(*kind).accent)
            .collect();
        for (i, a) in accents.iter().enumerate() {
            for b in &accents[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn container_style_uses_faded_accent() {
        let theme = Theme::Dark;
        let style = toast_container_style(&theme, palette::SUCCESS_500, 0.5);

        assert_eq!(style.border.color, fade(palette::SUCCESS_500, 0.5));
        assert!(style.background.is_some());
    }

    #[test]
    fn entering_card_waits_below_the_stack() {
        let entering = CardPlacement {
            translate_y: 40.0,
            ..placement(true, 1.0)
        };
        let layout = StackLayout {
            cards: vec![entering],
            height: 40.0,
            extent: 40.0,
            expanded: false,
        };
        let lane = entrance_lane(&layout);
        assert_eq!(lane, 40.0);
        assert_eq!(edge_distance(&entering, lane), 0.0);

        let settled = CardPlacement {
            translate_y: 0.0,
            ..placement(false, 1.0)
        };
        let layout = StackLayout {
            cards: vec![settled],
            ..layout
        };
        let lane = entrance_lane(&layout);
        assert_eq!(lane, 0.0);
        assert_eq!(edge_distance(&settled, lane), 0.0);
    }

    #[test]
    fn shown_cards_clear_the_entrance_lane() {
        let newest = CardPlacement {
            translate_y: 50.0,
            height: 50.0,
            ..placement(true, 1.0)
        };
        let older = CardPlacement {
            depth: 1,
            offset: 50.0,
            translate_y: -50.0,
            ..placement(false, 1.0)
        };
        let layout = StackLayout {
            cards: vec![older, newest],
            height: 90.0,
            extent: 90.0,
            expanded: false,
        };
        let lane = entrance_lane(&layout);
        assert_eq!(edge_distance(&older, lane), 100.0);
        assert!(edge_distance(&newest, lane) < edge_distance(&older, lane) - older.offset);
    }

    #[test]
    fn hidden_entering_cards_do_not_open_a_lane() {
        let hidden = CardPlacement {
            translate_y: 40.0,
            visible: false,
            ..placement(true, 0.0)
        };
        let layout = StackLayout {
            cards: vec![hidden],
            height: 0.0,
            extent: 0.0,
            expanded: false,
        };
        assert_eq!(entrance_lane(&layout), 0.0);
    }

    #[test]
    fn corner_follows_anchor() {
        assert_eq!(
            corner(Anchor::BottomRight),
            (alignment::Horizontal::Right, alignment::Vertical::Bottom)
        );
        assert_eq!(
            corner(Anchor::TopLeft),
            (alignment::Horizontal::Left, alignment::Vertical::Top)
        );
    }

    #[test]
    fn offsets_push_away_from_the_anchored_edge() {
        assert_eq!(edge_padding(Anchor::BottomLeft, 30.0).bottom, 30.0);
        assert_eq!(edge_padding(Anchor::BottomLeft, 30.0).top, 0.0);
        assert_eq!(edge_padding(Anchor::TopRight, 30.0).top, 30.0);
    }

    #[test]
    fn hover_region_matches_the_drawn_pile() {
        let layout = StackLayout {
            cards: Vec::new(),
            height: 150.0,
            extent: 110.0,
            expanded: false,
        };
        assert_eq!(region_height(&layout), 110.0);
    }
}
