use std::io::{self, Write};

use crate::feed::Rendered;

/// Write a rendered feed: text lines joined by newlines, or the JSON document,
/// each followed by a trailing newline.
pub fn emit(rendered: &Rendered, w: &mut dyn Write) -> io::Result<()> {
    match rendered {
        Rendered::Lines(lines) => writeln!(w, "{}", lines.join("\n")),
        Rendered::Json(json) => writeln!(w, "{json}"),
    }
}

pub fn emit_stdout(rendered: &Rendered) -> io::Result<()> {
    let mut out = io::stdout().lock();
    emit(rendered, &mut out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emitted(r: &Rendered) -> String {
        let mut buf = Vec::new();
        emit(r, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn lines_joined_with_newlines() {
        let r = Rendered::Lines(vec!["Feed: T".into(), "Link: L".into(), "".into()]);
        assert_eq!(emitted(&r), "Feed: T\nLink: L\n\n");
    }

    #[test]
    fn json_written_as_is() {
        let r = Rendered::Json("{\n  \"items\": []\n}".into());
        assert_eq!(emitted(&r), "{\n  \"items\": []\n}\n");
    }
}
