use outline_syntax::{
    merge_by_name, parse_first, parse_str, Docs, Document, Field, Function, ParseOptions, Type,
};

const TWO_FUNCS: &str = "outline: twoFuncs
\tpath: twoFuncs
\tfunctions:
\t\tdifference(a,b int) int
\t\tsum(a,b int) int
\t\t\tadd two things together
";

const LIBRARY: &str = "outline: lib
\tpath: lib/net
\ta small networking library
\tfor talking to peers
\tfunctions:
\t\tdial(addr string) conn
\t\t\topen a connection
\t\tlisten(addr string) listener
\ttypes:
\t\tconn
\t\t\ta live connection
\t\t\tfields:
\t\t\t\tremote string
\t\t\t\tlocal string
\t\t\tmethods:
\t\t\t\tclose() error
\t\t\t\t\tparams:
\t\t\t\t\t\tforce bool
\t\t\t\t\t\t\tskip flushing
\t\t\t\t\treturn: error
\t\t\t\t\texamples:
\t\t\t\t\t\tclosing
\t\t\t\t\t\t\tcode:
\t\t\t\t\t\t\t\tc.close()
\t\t\toperators:
\t\t\t\tconn == conn = boolean
\t\tlistener

outline: other
\tfunctions:
\t\tping()
";

fn parse(input: &str) -> Docs {
    parse_str(input, ParseOptions::default()).unwrap()
}

fn tabs_to_spaces(input: &str) -> String {
    input.replace('\t', "  ")
}

#[test]
fn document_name_only() {
    let doc = parse_first("outline: foo\n".as_bytes(), ParseOptions::default())
        .unwrap()
        .unwrap();
    assert_eq!(doc, Document::new("foo"));
}

#[test]
fn two_functions_with_receiver() {
    let docs = parse(TWO_FUNCS);
    assert_eq!(docs.len(), 1);

    let doc = &docs[0];
    assert_eq!(doc.name, "twoFuncs");
    assert_eq!(doc.path, "twoFuncs");
    assert_eq!(
        doc.functions,
        vec![
            Function::new("difference(a,b int) int", "twoFuncs"),
            Function {
                description: "add two things together".to_string(),
                ..Function::new("sum(a,b int) int", "twoFuncs")
            },
        ]
    );
    assert_eq!(doc.functions[1].function_name, "sum");
}

#[test]
fn field_lines_split_into_name_and_type() {
    let doc = &parse("outline: x\n  types:\n    t\n      fields:\n        hours float\n        seconds\n")[0];
    assert_eq!(
        doc.types[0].fields,
        vec![
            Field {
                name: "hours".to_string(),
                type_name: "float".to_string(),
                ..Default::default()
            },
            Field {
                name: "seconds".to_string(),
                ..Default::default()
            },
        ]
    );
}

#[test]
fn merge_fills_description_and_appends_types() {
    let docs = vec![
        Document {
            types: vec![Type::new("A")],
            ..Document::new("pkg")
        },
        Document {
            description: "desc".to_string(),
            types: vec![Type::new("B")],
            ..Document::new("pkg")
        },
    ];

    let merged = merge_by_name(docs);
    assert_eq!(
        merged.into_inner(),
        vec![Document {
            description: "desc".to_string(),
            types: vec![Type::new("A"), Type::new("B")],
            ..Document::new("pkg")
        }]
    );
}

#[test]
fn tabs_and_two_spaces_are_equivalent() {
    for input in [TWO_FUNCS, LIBRARY] {
        assert_eq!(parse(input), parse(&tabs_to_spaces(input)));
    }
}

#[test]
fn mixed_tab_and_space_indentation() {
    let mixed = "outline: twoFuncs\n\tpath: twoFuncs\n  functions:\n\t  difference(a,b int) int\n  \tsum(a,b int) int\n\t\t\tadd two things together\n";
    assert_eq!(parse(mixed), parse(TWO_FUNCS));
}

#[test]
fn full_grammar() {
    let docs = parse(LIBRARY);
    assert_eq!(docs.len(), 2);

    let lib = &docs[0];
    assert_eq!(lib.path, "lib/net");
    assert_eq!(lib.description, "a small networking library for talking to peers");
    assert_eq!(lib.functions.len(), 2);

    let conn = &lib.types[0];
    assert_eq!(conn.description, "a live connection");
    assert_eq!(conn.fields.len(), 2);
    assert_eq!(conn.operators[0].expression, "conn == conn = boolean");

    let close = &conn.methods[0];
    assert_eq!(close.receiver, "conn");
    assert_eq!(close.params[0].name, "force");
    assert_eq!(close.params[0].type_name, "bool");
    assert_eq!(close.params[0].description, "skip flushing");
    assert_eq!(close.return_value, "error");
    assert_eq!(close.examples[0].name, "closing");
    assert_eq!(close.examples[0].code, "c.close()");

    assert_eq!(lib.types[1], Type::new("listener"));
    assert_eq!(docs[1].functions[0].receiver, "other");
}

#[test]
fn reparse_of_canonical_text_is_stable() {
    for indent in ["\t", "  ", "    "] {
        for doc in parse(LIBRARY).iter() {
            let text = doc.marshal_indent(0, indent);
            let reparsed = parse(&text);
            assert_eq!(reparsed.len(), 1);

            let again = &reparsed[0];
            assert_eq!(again.name, doc.name);
            assert_eq!(again.path, doc.path);
            assert_eq!(again.description, doc.description);
            let sigs = |d: &Document| -> Vec<(String, String)> {
                d.functions
                    .iter()
                    .map(|f| (f.signature.clone(), f.description.clone()))
                    .collect()
            };
            assert_eq!(sigs(again), sigs(doc));
            let types = |d: &Document| -> Vec<(String, String, Vec<(String, String)>)> {
                d.types
                    .iter()
                    .map(|t| {
                        let fields = t
                            .fields
                            .iter()
                            .map(|f| (f.name.clone(), f.type_name.clone()))
                            .collect();
                        (t.name.clone(), t.description.clone(), fields)
                    })
                    .collect()
            };
            assert_eq!(types(again), types(doc));

            assert_eq!(again.marshal_indent(0, indent), text);
        }
    }
}

#[test]
fn sort_options_off_only_reorders_documents() {
    let input = format!("outline: zed\n  functions:\n    b()\n    a()\n\n{}", LIBRARY);
    let mut docs = parse(&input);
    let zed = docs[0].clone();
    docs.sort();

    // "lib/net" + "lib" < "other" < "zed"
    let names: Vec<&str> = docs.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["lib", "other", "zed"]);
    assert_eq!(docs[2], zed);
}

#[test]
fn sort_options_order_functions_and_types() {
    let options = ParseOptions::new().sort_functions(true).sort_types(true);
    let input = "outline: x\n  functions:\n    b()\n    a()\n  types:\n    z\n    y\n";
    let mut docs = parse_str(input, options).unwrap();
    docs.sort();

    let doc = &docs[0];
    let sigs: Vec<&str> = doc.functions.iter().map(|f| f.signature.as_str()).collect();
    assert_eq!(sigs, vec!["a()", "b()"]);
    let types: Vec<&str> = doc.types.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(types, vec!["y", "z"]);
}
