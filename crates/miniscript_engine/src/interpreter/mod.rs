
use std::collections::HashMap;

use ahash::RandomState;
use miniscript_frontend::ast::*;

use crate::error::{RuntimeError, RuntimeErrorKind, RuntimeResult};

/// A host callback. Receives the evaluated arguments, returns nothing.
pub type NativeFn = Box<dyn Fn(&[f64])>;

pub type NativeTable = HashMap<String, NativeFn, RandomState>;

/// Variable bindings of a single execution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    vars: HashMap<String, f64, RandomState>,
}

impl Environment {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.vars.insert(name.into(), value);
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.vars.iter().map(|(name, &value)| (name.as_str(), value))
    }
}

pub struct Interpreter<'natives> {
    natives: &'natives NativeTable,
    env: Environment,
}

impl<'natives> Interpreter<'natives> {
    pub fn new(natives: &'natives NativeTable) -> Self {
        Self {
            natives,
            env: Environment::default(),
        }
    }

    /// Runs the statements in order, stopping at the first error.
    pub fn execute_function(&mut self, func: FunctionDef) -> RuntimeResult<()> {
        for stmt in func.body {
            self.execute_statement(stmt)?;
        }

        Ok(())
    }

    fn execute_statement(&mut self, stmt: Stmt) -> RuntimeResult<()> {
        match stmt {
            Stmt::VarAssign { name, expr } => {
                let value = self.evaluate(&expr)?;
                self.env.set(name.name, value);
            }

            Stmt::Call { func, args } => {
                let args = args
                    .iter()
                    .map(|arg| self.evaluate(arg))
                    .collect::<RuntimeResult<Vec<_>>>()?;

                let native = self.natives.get(&func.name).ok_or_else(|| RuntimeError {
                    kind: RuntimeErrorKind::UnknownFunction(func.name.clone()),
                    span: func.span,
                })?;

                native(&args);
            }
        }

        Ok(())
    }

    pub fn evaluate(&self, expr: &Expr) -> RuntimeResult<f64> {
        match &expr.kind {
            ExprKind::Number(n) => Ok(*n),

            ExprKind::Var(ident) => self.env.get(&ident.name).ok_or_else(|| RuntimeError {
                kind: RuntimeErrorKind::UnknownVariable(ident.name.clone()),
                span: ident.span,
            }),

            ExprKind::Binary { op, lhs, rhs } => {
                let lhs = self.evaluate(lhs)?;
                let rhs = self.evaluate(rhs)?;
                Ok(apply_binop(*op, lhs, rhs))
            }
        }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn into_env(self) -> Environment {
        self.env
    }
}

// division by zero gives inf or NaN, never an error
fn apply_binop(op: BinOp, lhs: f64, rhs: f64) -> f64 {
    match op {
        BinOp::Add => lhs + rhs,
        BinOp::Sub => lhs - rhs,
        BinOp::Mul => lhs * rhs,
        BinOp::Div => lhs / rhs,
        BinOp::Mod => lhs % rhs,
    }
}
