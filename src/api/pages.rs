use crate::model::attendance::EmployeeSummary;
use std::fmt::Write;

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 2rem; }
table { border-collapse: collapse; }
th, td { border: 1px solid #999; padding: 0.3rem 0.8rem; }
td.num { text-align: right; }
.error { color: #a00; }
"#;

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        escape(title)
    )
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn form_page() -> String {
    layout(
        "Resumen de asistencias",
        r#"<h1>Resumen de asistencias</h1>
<form method="post" action="/resumen">
  <label>Inicio <input type="date" name="inicio" required></label>
  <label>Fin <input type="date" name="fin" required></label>
  <button type="submit">Consultar</button>
</form>"#,
    )
}

pub fn results_page(rows: &[EmployeeSummary], inicio: &str, fin: &str) -> String {
    let mut body = format!(
        "<h1>Resumen de asistencias</h1>\n<p>Del {} al {}</p>\n",
        escape(inicio),
        escape(fin)
    );
    body.push_str(
        "<table>\n<tr><th>Nombre</th><th>Asistencias</th><th>Retardos</th><th>Faltas</th></tr>\n",
    );
    for row in rows {
        // writing into a String never fails
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>",
            escape(&row.display_name),
            row.on_time,
            row.late,
            row.absent
        );
    }
    body.push_str("</table>\n<p><a href=\"/\">Nueva consulta</a></p>");
    layout("Resumen de asistencias", &body)
}

pub fn error_page(message: &str) -> String {
    layout(
        "Error",
        &format!(
            "<h1>No se pudo generar el resumen</h1>\n<p class=\"error\">{}</p>\n<p><a href=\"/\">Volver</a></p>",
            escape(message)
        ),
    )
}
