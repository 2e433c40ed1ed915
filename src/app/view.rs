// SPDX-License-Identifier: MPL-2.0
//! Dashboard layout with the toast overlay stacked on top.

use super::{DemoAction, Message};
use crate::i18n::fluent::I18n;
use crate::notify::Notifier;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::notifications;
use iced::widget::{button, text, Column, Container, Stack, Text};
use iced::{Element, Length, Theme};

const BUTTON_WIDTH: f32 = 220.0;

pub fn view<'a>(i18n: &'a I18n, notifier: &Notifier) -> Element<'a, Message> {
    let buttons = DemoAction::ALL
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, action| {
            column.push(
                button(Text::new(i18n.tr(action.label_key())))
                    .on_press(Message::Demo(*action))
                    .width(Length::Fixed(BUTTON_WIDTH)),
            )
        });

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(Text::new(i18n.tr("demo-heading")).size(typography::TITLE_MD))
        .push(
            Text::new(i18n.tr("demo-hint"))
                .size(typography::BODY)
                .style(|_: &Theme| text::Style {
                    color: Some(palette::GRAY_400),
                }),
        )
        .push(buttons);

    let overlay = notifications::view_overlay(notifier.surface(), notifier.store(), i18n)
        .map(Message::Toast);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(overlay)
        .into()
}
