use salary_stats::Statistics;

const COLUMNS: [&str; 4] = [
    "Язык программирования",
    "Вакансий найдено",
    "Вакансий обработано",
    "Средняя зарплата",
];

/// Render per-language statistics as an ASCII table with the title spliced
/// into the top border.
pub fn render_table(title: &str, stats: &[Statistics]) -> String {
    let mut rows: Vec<[String; 4]> = vec![COLUMNS.map(String::from)];
    for entry in stats {
        rows.push([
            entry.language.clone(),
            entry.vacancies_found.to_string(),
            entry.vacancies_processed.to_string(),
            entry.average_salary.to_string(),
        ]);
    }

    let mut widths = [0usize; 4];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&titled_border(title, &widths));
    for (i, row) in rows.iter().enumerate() {
        out.push_str(&render_row(row, &widths));
        // rule under the header row
        if i == 0 {
            out.push_str(&border(&widths));
        }
    }
    out.push_str(&border(&widths));
    out
}

fn border(widths: &[usize; 4]) -> String {
    let mut line = String::new();
    for width in widths {
        line.push('+');
        line.extend(std::iter::repeat('-').take(width + 2));
    }
    line.push_str("+\n");
    line
}

fn titled_border(title: &str, widths: &[usize; 4]) -> String {
    let mut chars: Vec<char> = border(widths).chars().collect();
    for (i, c) in title.chars().enumerate() {
        // keep the leading '+', never overrun the line
        if i + 1 >= chars.len() - 1 {
            break;
        }
        chars[i + 1] = c;
    }
    chars.into_iter().collect()
}

fn render_row(row: &[String; 4], widths: &[usize; 4]) -> String {
    let mut line = String::new();
    for (cell, width) in row.iter().zip(widths) {
        line.push_str("| ");
        line.push_str(cell);
        let padding = width - cell.chars().count();
        line.extend(std::iter::repeat(' ').take(padding));
        line.push(' ');
    }
    line.push_str("|\n");
    line
}
