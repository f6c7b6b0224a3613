/// iced widgets for the gallery
///
/// Translates a `GalleryView` description into widgets. No decisions about
/// what to show are made here; see `layout.rs`.

use iced::widget::{
    button, column, container, radio, row, scrollable, slider, text, tooltip, Column, Image, Row,
};
use iced::{Alignment, Element, Length, Theme};

use super::canvas::Canvas;
use super::layout::{GalleryLayout, GalleryView, SliderRow, Thumbnail};
use crate::state::update::Msg;

/// Width of the large image
const LARGE_WIDTH: f32 = 500.0;

pub fn view<'a>(view: GalleryView, canvas: &'a Canvas) -> Element<'a, Msg> {
    match view {
        GalleryView::Error(message) => container(text(message).size(24))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
        GalleryView::Gallery(layout) => gallery(layout, canvas),
    }
}

fn gallery<'a>(layout: GalleryLayout, canvas: &'a Canvas) -> Element<'a, Msg> {
    let header = row![
        text(layout.title).size(36),
        button(layout.surprise_label)
            .on_press(Msg::SurpriseMe)
            .padding(10),
    ]
    .spacing(20)
    .align_y(Alignment::Center);

    let sliders = layout
        .sliders
        .into_iter()
        .fold(Column::new().spacing(8), |col, info| col.push(slider_row(info)));

    let sizes = layout.sizes.iter().fold(Row::new().spacing(20), |sizes, choice| {
        sizes.push(radio(
            choice.label,
            choice.size,
            choice.checked.then_some(choice.size),
            Msg::SetSize,
        ))
    });

    let width = layout.chosen_size.width();
    let thumbnails = Row::with_children(
        layout
            .thumbnails
            .into_iter()
            .map(|thumb| thumbnail(thumb, width, canvas)),
    )
    .spacing(10)
    .wrap();

    let large = layout.canvas.map(|url| -> Element<'a, Msg> {
        match canvas.rendered_for(&url) {
            Some(handle) => Image::new(handle.clone())
                .width(Length::Fixed(LARGE_WIDTH))
                .into(),
            None => text(format!("Loading {}...", url)).into(),
        }
    });

    let content = column![
        header,
        text(layout.status).size(16),
        sliders,
        text(layout.size_heading).size(20),
        sizes,
        Row::new()
            .spacing(20)
            .push(container(thumbnails).width(Length::Fill))
            .push_maybe(large),
    ]
    .spacing(20)
    .padding(40);

    scrollable(content).into()
}

fn slider_row(info: SliderRow) -> Element<'static, Msg> {
    let label = text(info.label.clone()).width(Length::Fixed(70.0));
    let position = text(info.position.to_string()).width(Length::Fixed(30.0));
    let control = slider(0..=info.max, info.position, move |p| info.on_change(p))
        .width(Length::Fixed(200.0));

    row![label, control, position]
        .spacing(10)
        .align_y(Alignment::Center)
        .into()
}

fn thumbnail<'a>(thumb: Thumbnail, width: f32, canvas: &'a Canvas) -> Element<'a, Msg> {
    let picture: Element<'a, Msg> = match canvas.thumbnail(&thumb.url) {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fixed(width))
            .into(),
        None => text(thumb.caption.clone())
            .width(Length::Fixed(width))
            .into(),
    };

    let style: fn(&Theme, button::Status) -> button::Style = if thumb.selected {
        button::primary
    } else {
        button::text
    };

    let tile = button(picture)
        .on_press(thumb.on_click())
        .padding(4)
        .style(style);

    tooltip(tile, text(thumb.caption), tooltip::Position::Bottom).into()
}
