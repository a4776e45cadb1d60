use super::*;

const CELL_CHARACTERS: i32 = 10;
const CELL_SPACING: i32 = 2;
const HUE_LIGHT: u8 = 127;
const HUE_DARK: u8 = 63;
const BLUE: u8 = 200;

#[derive(Clone, Debug)]
pub struct TableOptions {
    pub position: Point,
    pub row_count: usize,
    pub column_count: usize,
    /// Makes the first row bold.
    pub has_header: bool,
    pub style: TextStyle,
    pub align: TextAlign,
    pub text_color: Color,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            position: Point::default(),
            row_count: 3,
            column_count: 3,
            has_header: false,
            style: TextStyle::default(),
            align: TextAlign::Left,
            text_color: Color::BLACK,
        }
    }
}

/// A grid of borderless textboxes with alternating row shading.
pub struct Table {
    measure: Rc<dyn TextMeasure>,
    options: TableOptions,
    cells: Vec<Textbox>,
}

impl Table {
    pub fn new(measure: Rc<dyn TextMeasure>, options: TableOptions) -> Result<Table> {
        let mut this = Table {
            measure,
            options,
            cells: Vec::new(),
        };
        this.create()?;
        Ok(this)
    }

    /// Rebuilds every cell from the options, carrying over existing values.
    fn create(&mut self) -> Result<()> {
        let old_values: Vec<String> = self.cells.iter().map(|c| c.value().to_string()).collect();
        let mut cells = Vec::with_capacity(self.options.row_count * self.options.column_count);

        let mut hue = HUE_LIGHT;
        let mut y = self.options.position.y;
        for row in 0..self.options.row_count {
            let mut x = self.options.position.x;
            let bold = self.options.has_header && row == 0;
            let shade = Color::from_rgb(hue, hue, BLUE);
            let mut row_height = 0;

            for _ in 0..self.options.column_count {
                let mut cell = Textbox::new_with_options(
                    Rc::clone(&self.measure),
                    TextboxOptions {
                        position: Point::new(x, y),
                        character_count: CELL_CHARACTERS,
                        style: self.options.style.clone(),
                        text_color: self.options.text_color,
                        box_color: shade,
                        background_color: shade,
                        border_width: 0,
                        align: self.options.align,
                    },
                )?;
                cell.set_bold(bold);
                if let Some(value) = old_values.get(cells.len()) {
                    cell.change_value(value);
                }
                x += cell.glyph().width * CELL_CHARACTERS + CELL_SPACING;
                row_height = cell.glyph().height;
                cells.push(cell);
            }

            hue = if hue == HUE_LIGHT { HUE_DARK } else { HUE_LIGHT };
            y += row_height + CELL_SPACING;
        }

        self.cells = cells;
        trace!(
            rows = self.options.row_count,
            cols = self.options.column_count,
            "table laid out"
        );
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.options.row_count
    }

    pub fn column_count(&self) -> usize {
        self.options.column_count
    }

    pub fn position(&self) -> Point {
        self.options.position
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[Textbox] {
        &self.cells
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Textbox> {
        self.index(row, col).map(|i| &self.cells[i])
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Textbox> {
        self.index(row, col).map(move |i| &mut self.cells[i])
    }

    /// Returns false if the cell does not exist.
    pub fn set_cell_value(&mut self, row: usize, col: usize, value: &str) -> bool {
        match self.cell_mut(row, col) {
            Some(cell) => {
                cell.change_value(value);
                true
            }
            None => false,
        }
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.options.row_count && col < self.options.column_count {
            Some(row * self.options.column_count + col)
        } else {
            None
        }
    }

    /// Total width and height of the grid.
    pub fn size(&self) -> Size {
        let Some(first) = self.cells.first() else {
            return Size::default();
        };
        let cols = self.options.column_count as i32;
        let rows = self.options.row_count as i32;
        let glyph = first.glyph();
        Size::new(
            glyph.width * CELL_CHARACTERS * cols + CELL_SPACING * (cols - 1),
            glyph.height * rows + CELL_SPACING * (rows - 1),
        )
    }

    /// Moves the table so it is horizontally centered on a surface of the
    /// given size.
    pub fn center(&mut self, surface: Size) -> Result<()> {
        if self.cells.is_empty() {
            return Err(Error::EmptyTable);
        }
        let x = surface.width / 2 - self.size().width / 2;
        self.options.position = Point::new(x, self.options.position.y);
        debug!(x, "centering table");
        self.create()
    }

    pub fn show(&self, canvas: &mut dyn Canvas) {
        for cell in &self.cells {
            cell.show(canvas);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table(options: TableOptions) -> Table {
        Table::new(Rc::new(MonospaceMeasure::default()), options).unwrap()
    }

    #[test]
    fn cells_are_laid_out_in_a_grid() {
        let t = table(TableOptions {
            position: Point::new(5, 5),
            row_count: 2,
            column_count: 3,
            ..Default::default()
        });
        assert_eq!(t.cells().len(), 6);
        assert_eq!(t.cell(0, 0).unwrap().position(), Point::new(5, 5));
        assert_eq!(t.cell(0, 2).unwrap().position(), Point::new(209, 5));
        assert_eq!(t.cell(1, 1).unwrap().position(), Point::new(107, 27));
        assert!(t.cell(2, 0).is_none());
        assert_eq!(t.size(), Size::new(304, 42));
    }

    #[test]
    fn rows_alternate_shade() {
        let t = table(TableOptions {
            row_count: 3,
            column_count: 1,
            ..Default::default()
        });
        let shade = |row| t.cell(row, 0).unwrap().background_color;
        assert_eq!(shade(0), Color::from_rgb(127, 127, 200));
        assert_eq!(shade(1), Color::from_rgb(63, 63, 200));
        assert_eq!(shade(2), Color::from_rgb(127, 127, 200));
    }

    #[test]
    fn header_row_is_bold() {
        let t = table(TableOptions {
            has_header: true,
            ..Default::default()
        });
        assert!(t.cell(0, 1).unwrap().style().bold);
        assert!(!t.cell(1, 1).unwrap().style().bold);
    }

    #[test]
    fn set_cell_value_fits_the_cell() {
        let mut t = table(TableOptions::default());
        assert!(t.set_cell_value(1, 2, "a rather long cell value"));
        assert_eq!(t.cell(1, 2).unwrap().value(), "a rather l");
        assert!(!t.set_cell_value(3, 0, "nope"));
    }

    #[test]
    fn center_keeps_values() {
        let mut t = table(TableOptions {
            row_count: 1,
            column_count: 2,
            ..Default::default()
        });
        t.set_cell_value(0, 1, "kept");
        t.center(Size::new(800, 600)).unwrap();
        assert_eq!(t.position(), Point::new(299, 0));
        assert_eq!(t.cell(0, 0).unwrap().position(), Point::new(299, 0));
        assert_eq!(t.cell(0, 1).unwrap().value(), "kept");
    }

    #[test]
    fn empty_table_cannot_center() {
        let mut t = table(TableOptions {
            row_count: 0,
            ..Default::default()
        });
        assert_eq!(t.center(Size::new(100, 100)), Err(Error::EmptyTable));
    }
}
