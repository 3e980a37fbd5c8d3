//! Geometry of the calendar grid.
//!
//! Every section is a month header followed by six rows of seven cells. Day 1 is
//! pushed into its weekday column by a leading placeholder whose width is
//! `first_day_offset` cells, and trailing placeholders pad the section so that it
//! always flows into exactly six rows.

use crate::error::{GridError, GridResult};
use crate::layout_constants::{
    CELL_WIDTH_EPSILON, COLUMNS, HEADER_HEIGHT, PADDED_ITEM_BASE, ROWS,
};
use crate::month::CalendarMonth;

/// Width and height of a cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSize {
    pub width: f64,
    pub height: f64,
}

/// Cell rectangle relative to the top-left corner of its section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellFrame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Maps grid coordinates to geometry for a fixed viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    viewport_width: f64,
    viewport_height: f64,
    header_height: f64,
    cell_size: CellSize,
}

impl GridLayout {
    /// Layout for a viewport, using the default month header height
    pub fn new(viewport_width: f64, viewport_height: f64) -> GridResult<Self> {
        Self::with_header_height(viewport_width, viewport_height, HEADER_HEIGHT)
    }

    /// Layout for a viewport with a custom header height (e.g. terminal rows)
    pub fn with_header_height(
        viewport_width: f64,
        viewport_height: f64,
        header_height: f64,
    ) -> GridResult<Self> {
        // Negated comparisons also reject NaN
        if !(viewport_width > 0.0) || !(viewport_height > header_height) || header_height < 0.0 {
            return Err(GridError::InvalidViewport {
                width: viewport_width,
                height: viewport_height,
            });
        }

        let cell_size = CellSize {
            width: viewport_width / COLUMNS as f64 - CELL_WIDTH_EPSILON,
            height: (viewport_height - header_height) / ROWS as f64,
        };

        Ok(Self {
            viewport_width,
            viewport_height,
            header_height,
            cell_size,
        })
    }

    /// Same header height, new viewport
    pub fn resized(&self, viewport_width: f64, viewport_height: f64) -> GridResult<Self> {
        Self::with_header_height(viewport_width, viewport_height, self.header_height)
    }

    pub fn cell_size(&self) -> CellSize {
        self.cell_size
    }

    pub fn header_height(&self) -> f64 {
        self.header_height
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Number of items in a month's section, placeholders included
    pub fn item_count(&self, month: &CalendarMonth) -> usize {
        let days = month.day_count as usize + 1;
        let padded = PADDED_ITEM_BASE - month.first_day_offset as usize;
        days.max(padded)
    }

    /// Size of an item: the leading placeholder spans `first_day_offset` cells
    pub fn size_for(&self, month: &CalendarMonth, item: usize) -> CellSize {
        if item == 0 {
            CellSize {
                width: self.cell_size.width * month.first_day_offset as f64,
                height: self.cell_size.height,
            }
        } else {
            self.cell_size
        }
    }

    /// Height of one section: header plus six rows
    pub fn section_height(&self) -> f64 {
        self.cell_size.height * ROWS as f64 + self.header_height
    }

    /// Vertical scroll offset at which `section` starts
    pub fn section_offset(&self, section: usize) -> f64 {
        self.section_height() * section as f64
    }

    /// Section nearest to a vertical scroll offset, never negative
    pub fn section_at_offset(&self, offset_y: f64) -> usize {
        let section = (offset_y / self.section_height()).round();
        if section.is_nan() || section < 0.0 {
            0
        } else {
            section as usize
        }
    }

    /// Horizontal center of the month label: the center of day 1's cell
    pub fn header_center_offset(&self, month: &CalendarMonth) -> f64 {
        month.first_day_offset as f64 * self.cell_size.width + self.cell_size.width / 2.0
    }

    /// Frame of an item relative to its section's origin
    pub fn frame_for(&self, month: &CalendarMonth, item: usize) -> CellFrame {
        let size = self.size_for(month, item);
        if item == 0 {
            return CellFrame {
                x: 0.0,
                y: self.header_height,
                width: size.width,
                height: size.height,
            };
        }

        let slot = month.first_day_offset as usize + item - 1;
        CellFrame {
            x: (slot % COLUMNS) as f64 * self.cell_size.width,
            y: self.header_height + (slot / COLUMNS) as f64 * self.cell_size.height,
            width: size.width,
            height: size.height,
        }
    }

    /// Number of rows the section's items produce when flowed left to right
    ///
    /// Items wrap to a new row when they no longer fit the viewport width.
    pub fn visual_rows(&self, month: &CalendarMonth) -> usize {
        let mut rows = 1;
        let mut x = 0.0;
        for item in 0..self.item_count(month) {
            let width = self.size_for(month, item).width;
            if x > 0.0 && x + width > self.viewport_width {
                rows += 1;
                x = 0.0;
            }
            x += width;
        }
        rows
    }

    /// Item occupying a row/column slot, if any
    ///
    /// Slots before day 1 belong to the leading placeholder (item 0).
    pub fn item_at(&self, month: &CalendarMonth, row: usize, column: usize) -> Option<usize> {
        if row >= ROWS || column >= COLUMNS {
            return None;
        }

        let slot = row * COLUMNS + column;
        let offset = month.first_day_offset as usize;
        if slot < offset {
            return Some(0);
        }

        let item = slot - offset + 1;
        (item < self.item_count(month)).then_some(item)
    }

    /// Item under a point relative to the section's origin
    pub fn hit_test(&self, month: &CalendarMonth, x: f64, y: f64) -> Option<usize> {
        if x < 0.0 || y < self.header_height {
            return None;
        }

        let row = ((y - self.header_height) / self.cell_size.height).floor() as usize;
        let column = (x / self.cell_size.width).floor() as usize;
        self.item_at(month, row, column)
    }
}
