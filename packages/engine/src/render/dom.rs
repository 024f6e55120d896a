//! DOM surface - one `div.col` per column, one `div.row` per cell
//!
//! Cell state maps to exactly one of the `leading-illuminate`, `afterglow` and
//! `leading-clear` classes; afterglow also gets an inline HSL color. Layout and
//! the look of each class are left to the page's stylesheet.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use super::{Dimensions, Surface, Viewport};
use crate::core::{RainError, Result};
use crate::domain::cell::STATE_TAGS;
use crate::domain::Cell;
use crate::simulation::Column;

pub const DEFAULT_HOST_SELECTOR: &str = "main";

pub struct DomSurface {
    window: Window,
    document: Document,
    host: Element,
    hue: u16,
    /// `cells[col][row]`
    cells: Vec<Vec<HtmlElement>>,
}

impl DomSurface {
    /// Bind to the first element matching `selector`.
    pub fn attach(selector: &str, hue: u16) -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| RainError::Host("no global window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| RainError::Host("window has no document".into()))?;
        let host = document
            .query_selector(selector)
            .map_err(RainError::host)?
            .ok_or_else(|| RainError::Host(format!("no element matches '{}'", selector)))?;

        Ok(Self {
            window,
            document,
            host,
            hue,
            cells: Vec::new(),
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    fn host_font_px(&self) -> Result<f64> {
        let Some(style) = self.window.get_computed_style(&self.host).map_err(RainError::host)? else {
            return Ok(0.0);
        };
        let size = style.get_property_value("font-size").map_err(RainError::host)?;
        Ok(parse_px(&size).unwrap_or(0.0))
    }

    fn create_row(&self, cell: &Cell) -> Result<HtmlElement> {
        let el = self
            .document
            .create_element("div")
            .map_err(RainError::host)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| RainError::Host("div is not an HtmlElement".into()))?;
        el.class_list().add_1("row").map_err(RainError::host)?;
        el.set_attribute("data-row", &cell.row.to_string()).map_err(RainError::host)?;
        el.set_attribute("data-col", &cell.col.to_string()).map_err(RainError::host)?;
        self.apply(&el, cell)?;
        Ok(el)
    }

    fn apply(&self, el: &HtmlElement, cell: &Cell) -> Result<()> {
        let mut buf = [0u8; 4];
        el.set_text_content(Some(&*cell.glyph.encode_utf8(&mut buf)));

        let classes = el.class_list();
        classes
            .remove_3(STATE_TAGS[0], STATE_TAGS[1], STATE_TAGS[2])
            .map_err(RainError::host)?;
        if let Some(tag) = cell.state.tag() {
            classes.add_1(tag).map_err(RainError::host)?;
        }

        let style = el.style();
        match cell.state.color(self.hue) {
            Some(color) => style.set_property("color", &color).map_err(RainError::host)?,
            None => {
                style.remove_property("color").map_err(RainError::host)?;
            }
        }
        Ok(())
    }
}

impl Surface for DomSurface {
    fn viewport(&self) -> Result<Viewport> {
        let root = self
            .document
            .document_element()
            .ok_or_else(|| RainError::Host("document has no root element".into()))?;
        Ok(Viewport {
            width_px: root.client_width() as f64,
            height_px: root.client_height() as f64,
            font_px: self.host_font_px()?,
        })
    }

    fn rebuild(&mut self, dims: Dimensions, columns: &[Column]) -> Result<()> {
        self.clear()?;
        let mut cells = Vec::with_capacity(dims.columns as usize);
        for column in columns {
            let col_el = self.document.create_element("div").map_err(RainError::host)?;
            col_el.class_list().add_1("col").map_err(RainError::host)?;
            let mut rows = Vec::with_capacity(dims.rows as usize);
            for cell in column.cells() {
                let row_el = self.create_row(cell)?;
                col_el.append_child(&row_el).map_err(RainError::host)?;
                rows.push(row_el);
            }
            self.host.append_child(&col_el).map_err(RainError::host)?;
            cells.push(rows);
        }
        self.cells = cells;
        Ok(())
    }

    fn paint(&mut self, cell: &Cell) -> Result<()> {
        let Some(el) = self
            .cells
            .get(cell.col as usize)
            .and_then(|rows| rows.get(cell.row as usize))
        else {
            return Ok(());
        };
        self.apply(el, cell)
    }

    fn clear(&mut self) -> Result<()> {
        self.host.set_inner_html("");
        self.cells.clear();
        Ok(())
    }
}

/// Parse a computed CSS length like `"16px"`.
fn parse_px(value: &str) -> Option<f64> {
    value.trim().strip_suffix("px")?.trim().parse().ok()
}
