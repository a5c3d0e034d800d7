//! A Lisp-style debug printer for expressions and statements, used by tests
//! and `--feature debug` tracing. Not part of the language's output surface.

use super::expr::*;
use super::stmt::*;

pub struct AstPrinter;

impl AstPrinter {
    pub fn print_expr(expr: &Expr) -> String {
        let mut printer = AstPrinter;
        expr.accept(&mut printer)
    }

    pub fn print_stmt(stmt: &Stmt) -> String {
        let mut printer = AstPrinter;
        stmt.accept(&mut printer)
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        let mut s = format!("({name}");
        for expr in exprs {
            s.push(' ');
            s.push_str(&expr.accept(self));
        }
        s.push(')');
        s
    }
}

impl ExprVisitor<String> for AstPrinter {
    fn visit_literal(&mut self, expr: &LiteralExpr) -> String {
        match &expr.token.literal {
            Some(literal) => format!("{literal:?}"),
            None => "nil".to_string(),
        }
    }

    fn visit_grouping(&mut self, expr: &GroupingExpr) -> String {
        self.parenthesize("group", &[&expr.inner])
    }

    fn visit_unary(&mut self, expr: &UnaryExpr) -> String {
        self.parenthesize(&expr.operator.lexeme, &[&expr.operand])
    }

    fn visit_binary(&mut self, expr: &BinaryExpr) -> String {
        self.parenthesize(&expr.operator.lexeme, &[&expr.left, &expr.right])
    }

    fn visit_variable(&mut self, expr: &VariableExpr) -> String {
        expr.name.lexeme.clone()
    }
}

impl StmtVisitor<String> for AstPrinter {
    fn visit_expr_stmt(&mut self, stmt: &ExprStmt) -> String {
        self.parenthesize(";", &[&stmt.expression])
    }

    fn visit_print_stmt(&mut self, stmt: &PrintStmt) -> String {
        self.parenthesize("print", &[&stmt.expression])
    }

    fn visit_var_decl(&mut self, stmt: &VarDeclStmt) -> String {
        match &stmt.initializer {
            Some(init) => self.parenthesize(&format!("var {}", stmt.name.lexeme), &[init]),
            None => format!("(var {})", stmt.name.lexeme),
        }
    }
}
