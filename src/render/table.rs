//! Box-drawing tables with per-column ANSI styling.

// ANSI escape constants
pub const DIM: &str = "\x1b[2m";
pub const BLUE: &str = "\x1b[34m";
pub const RESET: &str = "\x1b[0m";


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}


#[derive(Debug, Clone)]
pub struct Column {
    title: String,
    align: Align,
    style: Option<&'static str>,
}


impl Column {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            align: Align::Left,
            style: None,
        }
    }

    pub fn centered(mut self) -> Self {
        self.align = Align::Center;
        self
    }

    /// Apply an ANSI style to the column's header, cells and footer.
    pub fn styled(mut self, style: &'static str) -> Self {
        self.style = Some(style);
        self
    }
}


/// A fixed-column table printed with Unicode box-drawing characters.
/// Widths are computed from the widest cell per column; styles never
/// count toward width since they are applied after padding.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    footer: Option<Vec<String>>,
}


impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            footer: None,
        }
    }

    pub fn add_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    pub fn set_footer(&mut self, cells: Vec<String>) {
        self.footer = Some(cells);
    }

    /// Print the table to stdout.
    pub fn print(&self) {
        let widths = self.widths();

        println!("{}", separator(&widths, "┌", "┬", "┐"));
        let titles: Vec<String> = self.columns.iter().map(|c| c.title.clone()).collect();
        println!("{}", self.render_row(&titles, &widths));
        println!("{}", separator(&widths, "├", "┼", "┤"));

        for row in &self.rows {
            println!("{}", self.render_row(row, &widths));
        }

        if let Some(footer) = &self.footer {
            println!("{}", separator(&widths, "├", "┼", "┤"));
            println!("{}", self.render_row(footer, &widths));
        }

        println!("{}", separator(&widths, "└", "┴", "┘"));
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| c.title.chars().count())
            .collect();
        for row in self.rows.iter().chain(self.footer.iter()) {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    fn render_row(&self, cells: &[String], widths: &[usize]) -> String {
        let mut parts = Vec::with_capacity(self.columns.len());
        for (i, column) in self.columns.iter().enumerate() {
            let text = cells.get(i).map(String::as_str).unwrap_or("");
            let padded = pad(text, widths[i], column.align);
            let cell = match column.style {
                Some(style) => format!("{style}{padded}{RESET}"),
                None => padded,
            };
            parts.push(format!(" {cell} "));
        }
        format!("│{}│", parts.join("│"))
    }
}


fn pad(text: &str, width: usize, align: Align) -> String {
    let len = text.chars().count();
    let gap = width.saturating_sub(len);
    let (left, right) = match align {
        Align::Left => (0, gap),
        Align::Center => (gap / 2, gap - gap / 2),
    };
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}


fn separator(widths: &[usize], left: &str, mid: &str, right: &str) -> String {
    let line: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{left}{}{right}", line.join(mid))
}
