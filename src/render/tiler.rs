use crate::{
    foundation::core::{Rgb8, Size},
    foundation::error::{CardsmithError, CardsmithResult},
    foundation::math::half_floor,
    render::canvas::Canvas,
};

/// Concatenation axis for [`append_images`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
}

/// Placement on the cross axis when inputs differ in size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    /// Left or top edge.
    Start,
    /// Centered, odd remainders going to the far side.
    #[default]
    Center,
    /// Right or bottom edge.
    End,
}

/// A print-ready sheet: the source canvas repeated in a 2x2 grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrintSheet {
    canvas: Canvas,
}

impl PrintSheet {
    pub fn size(&self) -> Size {
        self.canvas.size()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}

/// Concatenate `images` along `direction`. The cross axis takes the largest input; smaller
/// inputs are placed by `alignment` over a `background` fill.
pub fn append_images(
    images: &[&Canvas],
    direction: Direction,
    alignment: Alignment,
    background: Rgb8,
) -> CardsmithResult<Canvas> {
    if images.is_empty() {
        return Err(CardsmithError::render("append_images needs at least one image"));
    }

    let (main_total, cross_max) = images.iter().fold((0u32, 0u32), |(main, cross), im| {
        let (m, c) = split_axes(im.size(), direction);
        (main + m, cross.max(c))
    });
    let out_size = match direction {
        Direction::Horizontal => Size::new(main_total, cross_max),
        Direction::Vertical => Size::new(cross_max, main_total),
    };

    let mut out = Canvas::new(out_size, background)?;
    let mut offset = 0i64;
    for im in images {
        let (main, cross) = split_axes(im.size(), direction);
        if cross != cross_max {
            tracing::warn!(
                expected = cross_max,
                got = cross,
                ?alignment,
                "appending images of unequal size; aligning on the cross axis"
            );
        }
        let slack = i64::from(cross_max) - i64::from(cross);
        let cross_pos = match alignment {
            Alignment::Start => 0,
            Alignment::Center => half_floor(slack),
            Alignment::End => slack,
        };
        match direction {
            Direction::Horizontal => out.paste(im.as_image(), offset, cross_pos),
            Direction::Vertical => out.paste(im.as_image(), cross_pos, offset),
        }
        offset += i64::from(main);
    }
    Ok(out)
}

/// Repeat `canvas` twice horizontally, then that strip twice vertically.
#[tracing::instrument(skip_all, fields(width = canvas.width(), height = canvas.height()))]
pub fn tile_to_sheet(canvas: &Canvas) -> CardsmithResult<PrintSheet> {
    let strip = append_images(
        &[canvas, canvas],
        Direction::Horizontal,
        Alignment::Center,
        Rgb8::WHITE,
    )?;
    let sheet = append_images(
        &[&strip, &strip],
        Direction::Vertical,
        Alignment::Center,
        Rgb8::WHITE,
    )?;
    Ok(PrintSheet { canvas: sheet })
}

fn split_axes(size: Size, direction: Direction) -> (u32, u32) {
    match direction {
        Direction::Horizontal => (size.width, size.height),
        Direction::Vertical => (size.height, size.width),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/tiler.rs"]
mod tests;
