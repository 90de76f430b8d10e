//! End-to-end template assembly tests.

use codemosaic::{
    ClassFragment, Context, ControlFlowFragment, Fragment, FunctionFragment, MosaicTemplate,
};
use pretty_assertions::assert_eq;

/// The DataProcessor scenario: a class with attributes and a method, a
/// top-level validation guard, and context-driven placeholder resolution.
fn data_processor_template() -> MosaicTemplate {
    let process_function = FunctionFragment::new("transform_data")
        .params(["input_data: list", "config: dict"])
        .returns("pd.DataFrame")
        .body(
            r#"
            # Data normalization pipeline
            processed = [
                ${processing_operation}(item, **config)
                for item in input_data
            ]
            return pd.DataFrame(processed)
            "#,
        );

    let processor_class = ClassFragment::new("DataProcessor")
        .base("BaseTransformer")
        .attr("MAX_BATCH_SIZE", 1000)
        .attr("DEFAULTS", [("threshold", 0.85)])
        .method(process_function);

    let validation_logic = ControlFlowFragment::new(
        "len(input_data) > MAX_BATCH_SIZE",
        "ValueError",
        "Input batch exceeds maximum allowed size",
    )
    .body("if ${guard_condition}:\n    raise ${error_type}(${error_message})");

    let mut template = MosaicTemplate::new("DataProcessor")
        .optimization_level("O3")
        .language("python");
    template.add_fragments([
        Fragment::from(processor_class),
        Fragment::from(validation_logic),
    ]);
    template
}

fn data_processor_context() -> Context {
    Context::new()
        .with("processing_operation", "normalize_with_threshold")
        .with("guard_condition", "len(input_data) > self.MAX_BATCH_SIZE")
}

#[test]
fn test_data_processor_document() {
    let rendered = data_processor_template()
        .render(&data_processor_context())
        .unwrap();

    insta::assert_snapshot!(rendered, @r#"
    class DataProcessor(BaseTransformer):
        MAX_BATCH_SIZE = 1000
        DEFAULTS = {'threshold': 0.85}

        def transform_data(self, input_data: list, config: dict) -> pd.DataFrame:
            # Data normalization pipeline
            processed = [
                normalize_with_threshold(item, **config)
                for item in input_data
            ]
            return pd.DataFrame(processed)

    if len(input_data) > self.MAX_BATCH_SIZE:
        raise ValueError("Input batch exceeds maximum allowed size")
    "#);
}

#[test]
fn test_data_processor_attribute_lines_precede_method() {
    let rendered = data_processor_template()
        .render(&data_processor_context())
        .unwrap();

    let attrs = rendered.find("MAX_BATCH_SIZE = 1000").unwrap();
    let defaults = rendered.find("DEFAULTS = {'threshold': 0.85}").unwrap();
    let method = rendered
        .find("def transform_data(self, input_data: list, config: dict) -> pd.DataFrame:")
        .unwrap();
    assert!(attrs < defaults && defaults < method);
}

#[test]
fn test_data_processor_render_is_byte_identical_across_calls() {
    let template = data_processor_template();
    let ctx = data_processor_context();
    assert_eq!(template.render(&ctx).unwrap(), template.render(&ctx).unwrap());
}

#[test]
fn test_missing_context_key_fails_with_offending_name() {
    let err = data_processor_template()
        .render(&Context::from([(
            "guard_condition",
            "len(input_data) > self.MAX_BATCH_SIZE",
        )]))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "unresolved placeholder '${processing_operation}' in function 'transform_data'"
    );
}

#[test]
fn test_guard_member_of_class() {
    let mut template = MosaicTemplate::new("Guarded");
    template.add_fragment(
        ClassFragment::new("Validator")
            .attr("LIMIT", 10)
            .method(ControlFlowFragment::new("failed", "RuntimeError", "validation failed")),
    );

    let rendered = template.render(&Context::new()).unwrap();
    insta::assert_snapshot!(rendered, @r#"
    class Validator:
        LIMIT = 10

        if failed:
            raise RuntimeError("validation failed")
    "#);
}

#[test]
fn test_top_level_fragments_separated_by_one_blank_line() {
    let mut template = MosaicTemplate::new("Pair");
    template
        .add_fragment(FunctionFragment::new("first").body("return 1"))
        .add_fragment(FunctionFragment::new("second").body("return 2"));

    let rendered = template.render(&Context::new()).unwrap();
    assert_eq!(
        rendered,
        "def first():\n    return 1\n\ndef second():\n    return 2\n"
    );
}
