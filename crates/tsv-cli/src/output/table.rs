/// Rendering options for the plain-text table.
#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    /// Hard cap on any single column's width.
    pub max_col_width: Option<usize>,
}

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_entity_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            let content = rows
                .iter()
                .filter_map(|row| row.get(index))
                .map(String::len)
                .max()
                .unwrap_or(0)
                .max(header.len());
            options
                .max_col_width
                .map_or(content, |cap| content.min(cap))
        })
        .collect();

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| format_cell(header, *width, options.max_col_width))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.len());

    let row_lines = rows
        .iter()
        .map(|row| {
            widths
                .iter()
                .enumerate()
                .map(|(index, width)| {
                    let value = row.get(index).map_or("-", String::as_str);
                    format_cell(value, *width, options.max_col_width)
                })
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect::<Vec<_>>();

    let mut out = vec![header_line, divider];
    out.extend(row_lines);
    out.join("\n")
}

fn format_cell(value: &str, width: usize, cap: Option<usize>) -> String {
    let truncated = match cap {
        Some(cap) if value.chars().count() > cap => {
            let kept: String = value.chars().take(cap.saturating_sub(1)).collect();
            format!("{kept}\u{2026}")
        }
        _ => value.to_string(),
    };
    format!("{truncated:<width$}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn columns_align_to_widest_value() {
        let rendered = render_entity_table(
            &["path", "severity"],
            &[
                vec!["a/widgets.json".to_string(), "error".to_string()],
                vec!["b.json".to_string(), "warning".to_string()],
            ],
            TableOptions::default(),
        );

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "path            severity");
        assert!(lines[1].starts_with("---"));
        assert_eq!(lines[2], "a/widgets.json  error   ");
    }

    #[test]
    fn missing_cells_render_dash() {
        let rendered = render_entity_table(
            &["a", "b"],
            &[vec!["x".to_string()]],
            TableOptions::default(),
        );
        assert!(rendered.lines().last().is_some_and(|l| l.contains('-')));
    }

    #[test]
    fn long_values_truncate_with_ellipsis() {
        let rendered = render_entity_table(
            &["path"],
            &[vec!["specification/very/long/path/widgets.json".to_string()]],
            TableOptions {
                max_col_width: Some(10),
            },
        );
        assert!(rendered.contains('\u{2026}'));
    }
}
