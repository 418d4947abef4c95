//! Canonical text form of a [`Document`].
//!
//! This is a projection, not an inverse of the parser: only name, path,
//! description, function signatures and descriptions, and type names,
//! descriptions and fields are written. Re-parsing the output yields the same
//! values for those parts, except that a nameless document's description is
//! read back as its name.

use crate::model::Document;
use crate::token::TokenKind;

/// Render `doc` with `indent` repeated once per level, starting at `depth`.
pub fn marshal_indent(doc: &Document, depth: usize, indent: &str) -> String {
    let mut out = String::new();
    let keyword = TokenKind::Outline.as_str();

    if doc.name.is_empty() {
        line(&mut out, indent, depth, &format!("{}:", keyword));
    } else {
        line(&mut out, indent, depth, &format!("{}: {}", keyword, doc.name));
    }

    if !doc.path.is_empty() {
        let text = format!("{}: {}", TokenKind::Path.as_str(), doc.path);
        line(&mut out, indent, depth + 1, &text);
    }

    if !doc.description.is_empty() {
        lines(&mut out, indent, depth + 1, &doc.description);
    }

    if !doc.functions.is_empty() {
        let keyword = format!("{}:", TokenKind::Functions.as_str());
        line(&mut out, indent, depth + 1, &keyword);
        for function in &doc.functions {
            line(&mut out, indent, depth + 2, &function.signature);
            if !function.description.is_empty() {
                lines(&mut out, indent, depth + 3, &function.description);
            }
        }
    }

    if !doc.types.is_empty() {
        let keyword = format!("{}:", TokenKind::Types.as_str());
        line(&mut out, indent, depth + 1, &keyword);
        for t in &doc.types {
            line(&mut out, indent, depth + 2, &t.name);
            if !t.description.is_empty() {
                lines(&mut out, indent, depth + 4, &t.description);
            }
            if !t.fields.is_empty() {
                let keyword = format!("{}:", TokenKind::Fields.as_str());
                line(&mut out, indent, depth + 3, &keyword);
                for field in &t.fields {
                    if field.type_name.is_empty() {
                        line(&mut out, indent, depth + 4, &field.name);
                    } else {
                        let text = format!("{} {}", field.name, field.type_name);
                        line(&mut out, indent, depth + 4, &text);
                    }
                }
            }
        }
    }

    out
}

fn line(out: &mut String, indent: &str, depth: usize, text: &str) {
    out.push_str(&indent.repeat(depth));
    out.push_str(text);
    out.push('\n');
}

/// One output line per `\n`-separated segment of `text`.
fn lines(out: &mut String, indent: &str, depth: usize, text: &str) {
    for segment in text.split('\n') {
        line(out, indent, depth, segment);
    }
}

impl Document {
    /// See [`marshal_indent`].
    pub fn marshal_indent(&self, depth: usize, indent: &str) -> String {
        marshal_indent(self, depth, indent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Field, Function, Type};
    use crate::{parse_str, ParseOptions};

    const UNSORTED: &str = "
\toutline: twoFuncs
\t\tpath: twoFuncs
\t\tfunctions:
\t\t\tdifference(a,b int) int
\t\t\tsum(a,b int) int
\t\t\t\tadd two things together

\toutline: time
\t\tfunctions:
\t\t\tduration(string) duration
\t\t\t\tparse a duration
\t\t\ttime(string, format=..., location=...) time
\t\t\t\tparse a time
\t\t\tnow() time
\t\t\t\tnew time instance set to current time
\t\t\t\timplementations are able to make this a constant
\t\t\tzero() time
\t\t\t\ta constant
\t
\t\ttypes:
\t\t\tduration
\t\t\t\ta period of time
\t\t\t\tmethods:
\t\t\t\t\tadd(d duration) int
\t\t\t\t\t\tparams:
\t\t\t\t\t\t\t\td duration
\t\t\t\tfields:
\t\t\t\t\thours float
\t\t\t\t\tminutes float
\t\t\t\t\tnanoseconds int
\t\t\t\t\tseconds float
\t\t\t\toperators:
\t\t\t\t\tduration - time = duration
\t\t\t\t\tduration + time = time
\t\t\t\t\tduration == duration = boolean
\t\t\t\t\tduration < duration = booleans
\t\t\ttime
\t\t\t\tfields:
\t\t\t\toperators:
\t\t\t\t\ttime == time = boolean
\t\t\t\t\ttime < time = boolean";

    const EXPECT_TIME: &str = "outline: time
\tfunctions:
\t\tduration(string) duration
\t\t\tparse a duration
\t\tnow() time
\t\t\tnew time instance set to current time implementations are able to make this a constant
\t\ttime(string, format=..., location=...) time
\t\t\tparse a time
\t\tzero() time
\t\t\ta constant
\ttypes:
\t\tduration
\t\t\t\ta period of time
\t\t\tfields:
\t\t\t\thours float
\t\t\t\tminutes float
\t\t\t\tnanoseconds int
\t\t\t\tseconds float
\t\ttime
";

    const EXPECT_TWO_FUNCS: &str = "outline: twoFuncs
\tpath: twoFuncs
\tfunctions:
\t\tdifference(a,b int) int
\t\tsum(a,b int) int
\t\t\tadd two things together
";

    #[test]
    fn sorted_documents_serialize_canonically() {
        let options = ParseOptions::new().sort_functions(true).sort_types(true);
        let mut docs = parse_str(UNSORTED, options).unwrap();
        docs.sort();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].marshal_indent(0, "\t"), EXPECT_TIME);
        assert_eq!(docs[1].marshal_indent(0, "\t"), EXPECT_TWO_FUNCS);
    }

    #[test]
    fn nameless_document() {
        assert_eq!(Document::default().marshal_indent(0, "  "), "outline:\n");
    }

    #[test]
    fn nameless_document_description_becomes_name_on_reparse() {
        let input = "outline:\n  functions:\n    f()\n  trailing desc\n";
        let doc = &parse_str(input, ParseOptions::default()).unwrap()[0];
        assert_eq!(doc.name, "");
        assert_eq!(doc.description, "trailing desc");

        // The description is written straight after `outline:`, where the
        // parser reads the name.
        let text = doc.marshal_indent(0, "  ");
        assert_eq!(text, "outline:\n  trailing desc\n  functions:\n    f()\n");

        let again = &parse_str(&text, ParseOptions::default()).unwrap()[0];
        assert_eq!(again.name, "trailing desc");
        assert_eq!(again.description, "");
        assert_eq!(again.functions.len(), 1);
        assert_eq!(again.functions[0].signature, "f()");
        assert_eq!(again.functions[0].receiver, "trailing desc");
    }

    #[test]
    fn depth_and_unit_prefix_every_line() {
        let doc = Document {
            name: "x".to_string(),
            description: "about x".to_string(),
            functions: vec![Function::new("f()", "x")],
            types: vec![Type {
                fields: vec![Field {
                    name: "n".to_string(),
                    ..Default::default()
                }],
                ..Type::new("t")
            }],
            ..Default::default()
        };
        let expected = "  outline: x
    about x
    functions:
      f()
    types:
      t
        fields:
          n
";
        assert_eq!(doc.marshal_indent(1, "  "), expected);
    }

    #[test]
    fn multi_line_descriptions_split_per_line() {
        let doc = Document {
            name: "x".to_string(),
            functions: vec![Function {
                description: "one\ntwo".to_string(),
                ..Function::new("f()", "x")
            }],
            ..Default::default()
        };
        assert_eq!(
            doc.marshal_indent(0, "\t"),
            "outline: x\n\tfunctions:\n\t\tf()\n\t\t\tone\n\t\t\ttwo\n"
        );
    }
}
