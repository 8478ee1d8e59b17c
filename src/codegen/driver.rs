// Compiler driver state machine
//
// Compilation runs strictly sequentially through ReadSchema, EmitLayout,
// EmitParser, and Done, with no branching back. A failure in ReadSchema
// halts the machine and every later state is unreachable; there is no
// retry. The fragments produced along the way are assembled into one
// generated module when the machine reaches Done.

use crate::codegen::layout::RecordLayout;
use crate::codegen::parser::emit_parser;
use crate::codegen::record::emit_record;
use crate::codegen::EmitConfig;
use crate::internal::error::{Error, Result};
use crate::schema::reader::read_schema;
use crate::schema::types::Schema;
use crate::schema::validator::validate_schema;

/// Header stamped onto every generated module.
const GENERATED_HEADER: &str = "// GENERATED BY optio. DO NOT EDIT.\n";

/// Represents the state of the compile pipeline.
#[derive(Debug, PartialEq, Eq)]
pub enum CompileState {
    /// Read and validate the schema text
    ReadSchema,
    /// Derive the record layout and emit the struct definition
    EmitLayout,
    /// Emit the parser function body
    EmitParser,
    /// Compilation is complete
    Done,
}

/// The assembled output of one compilation.
#[derive(Debug)]
pub struct GeneratedModule {
    /// Complete source text of the generated module
    pub source: String,
    /// The validated schema the module was generated from
    pub schema: Schema,
    /// The derived record layout
    pub layout: RecordLayout,
}

/// Represents the context and state of one compilation.
#[derive(Debug)]
pub struct CompileContext {
    schema_text: String,
    emit: EmitConfig,
    state: CompileState,
    schema: Option<Schema>,
    layout: Option<RecordLayout>,
    record_source: String,
    parser_source: String,
}

impl CompileContext {
    /// Creates a new compile context for the given schema text.
    pub fn new(schema_text: impl Into<String>, emit: EmitConfig) -> Self {
        Self {
            schema_text: schema_text.into(),
            emit,
            state: CompileState::ReadSchema,
            schema: None,
            layout: None,
            record_source: String::new(),
            parser_source: String::new(),
        }
    }

    /// Returns the current pipeline state.
    pub fn state(&self) -> &CompileState {
        &self.state
    }

    /// Handles the ReadSchema state: parse the schema text, validate it,
    /// and transition to EmitLayout. Any failure here is fatal and leaves
    /// the later states unreachable.
    fn handle_read_schema(&mut self) -> Result<()> {
        let schema = read_schema(&self.schema_text)?;
        validate_schema(&schema)?;

        tracing::debug!(options = schema.len(), "compile state transition: ReadSchema -> EmitLayout");
        self.schema = Some(schema);
        self.state = CompileState::EmitLayout;
        Ok(())
    }

    /// Handles the EmitLayout state: derive the immutable record layout
    /// and emit the struct definition.
    fn handle_emit_layout(&mut self) -> Result<()> {
        let schema = self
            .schema
            .as_ref()
            .ok_or_else(|| Error::InternalError("EmitLayout reached without a schema".to_string()))?;

        let layout = RecordLayout::derive(schema);
        self.record_source = emit_record(&layout, &self.emit);

        tracing::debug!(fields = layout.len(), "compile state transition: EmitLayout -> EmitParser");
        self.layout = Some(layout);
        self.state = CompileState::EmitParser;
        Ok(())
    }

    /// Handles the EmitParser state: emit the parser function.
    fn handle_emit_parser(&mut self) -> Result<()> {
        let schema = self
            .schema
            .as_ref()
            .ok_or_else(|| Error::InternalError("EmitParser reached without a schema".to_string()))?;

        self.parser_source = emit_parser(schema, &self.emit);

        tracing::debug!("compile state transition: EmitParser -> Done");
        self.state = CompileState::Done;
        Ok(())
    }

    /// Runs the machine to completion and assembles the generated module.
    pub fn run(mut self) -> Result<GeneratedModule> {
        loop {
            match self.state {
                CompileState::ReadSchema => self.handle_read_schema()?,
                CompileState::EmitLayout => self.handle_emit_layout()?,
                CompileState::EmitParser => self.handle_emit_parser()?,
                CompileState::Done => break,
            }
        }

        let schema = self
            .schema
            .take()
            .ok_or_else(|| Error::InternalError("Done reached without a schema".to_string()))?;
        let layout = self
            .layout
            .take()
            .ok_or_else(|| Error::InternalError("Done reached without a layout".to_string()))?;

        let mut source = String::new();
        source.push_str(GENERATED_HEADER);
        source.push('\n');
        source.push_str(&self.record_source);
        source.push('\n');
        source.push_str(&self.parser_source);

        tracing::info!(
            options = schema.len(),
            fields = layout.len(),
            "generated config module"
        );

        Ok(GeneratedModule {
            source,
            schema,
            layout,
        })
    }
}

/// Compiles schema text into a generated module with default naming.
pub fn compile_schema(schema_text: &str) -> Result<GeneratedModule> {
    CompileContext::new(schema_text, EmitConfig::default()).run()
}
