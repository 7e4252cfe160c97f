// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The composer fills the window; toasts are stacked on top of it.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::composer::{self, ViewContext as ComposerViewContext};
use crate::ui::notifications::{self, Toast};
use iced::{
    widget::{Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub composer: &'a composer::State,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let composer_view = ctx
        .composer
        .view(ComposerViewContext { i18n: ctx.i18n })
        .map(Message::Composer);

    let base = Container::new(composer_view)
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(base)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
