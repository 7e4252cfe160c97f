// SPDX-License-Identifier: MPL-2.0
//! Composer layout: form panel and preview panel side by side.
//!
//! In right-to-left mode the form sits on the right and every label, input
//! and button row is aligned to the right edge.

use super::{Message, State};
use crate::domain::poster::{Direction, Platform, PosterLanguage};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, shadow, sizing, spacing, typography};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, container, image, radio, scrollable, text, text_editor, text_input, Column, Container, Row, Text,
};
use iced::{Background, Border, ContentFit, Element, Length, Theme};

/// Contextual data needed to render the composer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let direction = self.form().direction();

        let form_panel = panel(form_column(self, ctx.i18n, direction));
        let preview_panel = panel(preview_column(self, ctx.i18n, direction));

        let panels = if direction.is_rtl() {
            [preview_panel, form_panel]
        } else {
            [form_panel, preview_panel]
        };

        let row = Container::new(Row::with_children(panels).spacing(spacing::XL))
            .max_width(sizing::FORM_MAX_WIDTH);

        scrollable(
            Container::new(row)
                .width(Length::Fill)
                .align_x(Horizontal::Center)
                .padding(spacing::LG),
        )
        .into()
    }
}

fn form_column<'a>(state: &'a State, i18n: &'a I18n, direction: Direction) -> Column<'a, Message> {
    let form = state.form();
    let align = horizontal(direction);

    let title = label(i18n.tr("composer-title"), typography::TITLE_LG).style(|_: &Theme| {
        text::Style {
            color: Some(palette::PRIMARY_700),
        }
    });
    let tagline = label(i18n.tr("composer-tagline"), typography::BODY).style(muted_text);

    let app_name = text_input(&i18n.tr("composer-app-name-placeholder"), form.app_name())
        .on_input(Message::AppNameChanged)
        .align_x(align)
        .padding(spacing::SM);

    let app_desc = text_editor(state.desc_editor())
        .placeholder(i18n.tr("composer-app-desc-placeholder"))
        .on_action(Message::AppDescEdited)
        .padding(spacing::SM)
        .height(Length::Fixed(sizing::DESC_EDITOR_HEIGHT));

    let mut features = Column::new().spacing(spacing::XS).align_x(align);
    for (index, feature) in form.features().iter().enumerate() {
        let placeholder = i18n.tr_with_args(
            "composer-feature-placeholder",
            &[("index", &(index + 1).to_string())],
        );
        features = features.push(
            text_input(&placeholder, feature)
                .on_input(move |value| Message::FeatureChanged(index, value))
                .align_x(align)
                .padding(spacing::SM),
        );
    }
    let add_feature = button(label(i18n.tr("composer-add-feature"), typography::BODY))
        .on_press(Message::AddFeature)
        .style(button::text);

    let languages = PosterLanguage::ALL.iter().fold(
        Row::new().spacing(spacing::MD),
        |row, &language| {
            row.push(
                radio(
                    i18n.tr(&format!("language-name-{}", language.code())),
                    language,
                    Some(form.language()),
                    Message::LanguageSelected,
                )
                .text_shaping(text::Shaping::Advanced),
            )
        },
    );

    let platforms = Platform::ALL.iter().fold(
        Row::new().spacing(spacing::MD),
        |row, &platform| {
            row.push(
                radio(
                    i18n.tr(&format!("platform-name-{}", platform.code())),
                    platform,
                    Some(form.platform()),
                    Message::PlatformSelected,
                )
                .text_shaping(text::Shaping::Advanced),
            )
        },
    );

    let generate = button(
        Container::new(label(i18n.tr("composer-generate-button"), typography::BODY_LG))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .on_press(Message::GenerateRequested)
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(button::primary);

    let mut column = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .align_x(align)
        .push(title)
        .push(tagline)
        .push(field(i18n.tr("composer-app-name-label"), app_name.into()))
        .push(field(i18n.tr("composer-app-desc-label"), app_desc.into()))
        .push(field(
            i18n.tr("composer-features-label"),
            features.push(add_feature).into(),
        ))
        .push(field(i18n.tr("composer-language-label"), languages.into()))
        .push(field(i18n.tr("composer-platform-label"), platforms.into()))
        .push(generate);

    if state.is_generating() {
        column = column
            .push(label(i18n.tr("composer-generating"), typography::CAPTION).style(muted_text));
    }

    column
}

fn preview_column<'a>(
    state: &'a State,
    i18n: &'a I18n,
    direction: Direction,
) -> Column<'a, Message> {
    let title = label(i18n.tr("preview-title"), typography::TITLE_MD);

    let body: Element<'a, Message> = match state.poster() {
        Some(poster) => image(poster.handle().clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::PREVIEW_MAX_HEIGHT))
            .into(),
        None => label(i18n.tr("preview-placeholder"), typography::BODY)
            .style(muted_text)
            .into(),
    };

    let frame = Container::new(body)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PREVIEW_MAX_HEIGHT + spacing::XL))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(|_: &Theme| container::Style {
            background: Some(Background::Color(palette::GRAY_100)),
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            ..container::Style::default()
        });

    let mut column = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .align_x(horizontal(direction))
        .push(title)
        .push(frame);

    if let Some(poster) = state.poster() {
        let (width, height) = poster.dimensions();
        let details = i18n.tr_with_args(
            "preview-details",
            &[
                ("format", &poster.format_name()),
                ("width", &width.to_string()),
                ("height", &height.to_string()),
            ],
        );
        let download = button(
            Container::new(label(i18n.tr("preview-download-button"), typography::BODY))
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .on_press(Message::DownloadRequested)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(button::success);

        column = column
            .push(label(details, typography::CAPTION).style(muted_text))
            .push(download);
    }

    column
}

fn horizontal(direction: Direction) -> Horizontal {
    match direction {
        Direction::RightToLeft => Horizontal::Right,
        Direction::LeftToRight => Horizontal::Left,
    }
}

fn label<'a>(content: String, size: f32) -> Text<'a> {
    Text::new(content)
        .size(size)
        .shaping(text::Shaping::Advanced)
}

/// Label stacked above its input.
fn field<'a>(title: String, input: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(label(title, typography::BODY))
        .push(input)
        .into()
}

fn panel<'a>(content: Column<'a, Message>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::FillPortion(1))
        .padding(spacing::LG)
        .style(|theme: &Theme| container::Style {
            background: Some(Background::Color(
                theme.extended_palette().background.base.color,
            )),
            border: Border {
                radius: radius::LG.into(),
                ..Border::default()
            },
            shadow: shadow::MD,
            ..container::Style::default()
        })
        .into()
}

fn muted_text(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::GRAY_500),
    }
}
