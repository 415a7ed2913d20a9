//! Target text generation from the typed tree.
//!
//! Statements are rendered in place, one block per IF branch or WHILE body.
//! Declarations are not hoisted: with the analyzer's default shared scope a
//! variable declared in a body may be used after it, and the rendered text
//! then refers to it outside the block that declares it. Analyze with
//! `AnalyzerOptions { block_scopes: true }` when the output must be valid Java.

use plc_analyzer::{TypedExpr, TypedExprKind, TypedSource, TypedStmt};
use plc_registry::Registry;
use tracing::debug;

/// Layout of the generated program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Name of the wrapping class.
    pub class_name: String,
    /// Spaces per indentation level.
    pub indent: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            class_name: "Main".to_string(),
            indent: 4,
        }
    }
}

/// Renders a typed program as Java-like source text.
pub struct Generator<'r> {
    registry: &'r Registry,
    options: GeneratorOptions,
}

impl<'r> Generator<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            options: GeneratorOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    /// Render a whole program wrapped in a class with a `main` method.
    pub fn generate(&self, source: &TypedSource) -> String {
        let mut out = Output::new(self.options.indent);

        out.push(&format!("public final class {} {{", self.options.class_name));
        out.newline(0);
        out.newline(1);
        out.push("public static void main(String[] args) {");
        for stmt in &source.stmts {
            out.newline(2);
            self.stmt(&mut out, stmt, 2);
        }
        out.newline(1);
        out.push("}");
        out.newline(0);
        out.newline(0);
        out.push("}");
        out.newline(0);

        debug!(bytes = out.text.len(), "generated source");
        out.text
    }

    fn stmt(&self, out: &mut Output, stmt: &TypedStmt, level: usize) {
        match stmt {
            TypedStmt::Expr(expr) => {
                out.push(&self.expr(expr));
                out.push(";");
            }
            TypedStmt::Declaration { name, ty, value } => {
                out.push(self.registry.target_type_name(*ty));
                out.push(" ");
                out.push(name);
                if let Some(value) = value {
                    out.push(" = ");
                    out.push(&self.expr(value));
                }
                out.push(";");
            }
            TypedStmt::Assignment { name, value } => {
                out.push(name);
                out.push(" = ");
                out.push(&self.expr(value));
                out.push(";");
            }
            TypedStmt::If {
                condition,
                then_stmts,
                else_stmts,
            } => {
                out.push(&format!("if ({}) ", self.expr(condition)));
                self.block(out, then_stmts, level);
                if !else_stmts.is_empty() {
                    out.push(" else ");
                    self.block(out, else_stmts, level);
                }
            }
            TypedStmt::While { condition, body } => {
                out.push(&format!("while ({}) ", self.expr(condition)));
                self.block(out, body, level);
            }
        }
    }

    /// `{ ... }` with statements one level deeper than `level`.
    fn block(&self, out: &mut Output, stmts: &[TypedStmt], level: usize) {
        out.push("{");
        if stmts.is_empty() {
            out.push("}");
            return;
        }
        for stmt in stmts {
            out.newline(level + 1);
            self.stmt(out, stmt, level + 1);
        }
        out.newline(level);
        out.push("}");
    }

    fn expr(&self, expr: &TypedExpr) -> String {
        match &expr.kind {
            TypedExprKind::Literal(value) => value.to_string(),
            TypedExprKind::Group(inner) => format!("({})", self.expr(inner)),
            TypedExprKind::Binary(op, left, right) => {
                format!("{} {} {}", self.expr(left), op, self.expr(right))
            }
            TypedExprKind::Var(name) => name.clone(),
            TypedExprKind::Function { target, args, .. } => {
                let args: Vec<_> = args.iter().map(|arg| self.expr(arg)).collect();
                format!("{}({})", target, args.join(", "))
            }
        }
    }
}

/// Text buffer with indentation-aware line breaks.
struct Output {
    text: String,
    indent: usize,
}

impl Output {
    fn new(indent: usize) -> Self {
        Self {
            text: String::new(),
            indent,
        }
    }

    fn push(&mut self, s: &str) {
        self.text.push_str(s);
    }

    fn newline(&mut self, level: usize) {
        self.text.push('\n');
        self.text.push_str(&" ".repeat(level * self.indent));
    }
}
