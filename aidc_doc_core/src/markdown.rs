//! Markdown building blocks shared by every generated page.

use std::fmt::Write;

/// Front matter that hides the outline and the navigation bar.
pub const FRONT_MATTER: &str = "---\noutline: false\nnavbar: false\n---\n\n";

/// Render a table whose columns are padded to their widest cell.
///
/// Widths are counted in characters, headers included, so the raw Markdown
/// stays aligned for non-ASCII text. Rows shorter than `headers` are padded
/// with empty cells.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
	let mut widths: Vec<usize> = headers.iter().map(|header| header.chars().count()).collect();

	for row in rows {
		for (width, cell) in widths.iter_mut().zip(row) {
			*width = (*width).max(cell.chars().count());
		}
	}

	let mut table = String::new();
	write_row(&mut table, &widths, headers.iter().copied());

	table.push('|');
	for width in &widths {
		table.push_str(&"-".repeat(width + 2));
		table.push('|');
	}
	table.push('\n');

	for row in rows {
		write_row(&mut table, &widths, row.iter().map(String::as_str));
	}

	table
}

fn write_row<'a>(table: &mut String, widths: &[usize], mut cells: impl Iterator<Item = &'a str>) {
	table.push('|');

	for &width in widths {
		let cell = cells.next().unwrap_or("");
		let _ = write!(table, " {cell:<width$} |");
	}

	table.push('\n');
}

/// Upper-case the first character and leave the rest untouched.
pub fn title_case(value: &str) -> String {
	let mut chars = value.chars();

	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
