//! Symbol table for rules and variables

use crate::frontend::ast::Expr;
use std::collections::HashMap;

/// Rules and variables known during one checking pass
///
/// A scope may borrow a parent; lookups fall through to it, definitions
/// always land in the innermost scope.
#[derive(Debug)]
pub struct Scope<'p> {
    /// Rule name -> formal parameter name
    rules: HashMap<String, String>,
    /// Variable name -> most recently bound expression
    vars: HashMap<String, Expr>,
    parent: Option<&'p Scope<'p>>,
}

impl<'p> Scope<'p> {
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
            vars: HashMap::new(),
            parent: None,
        }
    }

    pub fn with_parent(parent: &'p Scope<'p>) -> Self {
        Self {
            rules: HashMap::new(),
            vars: HashMap::new(),
            parent: Some(parent),
        }
    }

    /// Register a rule signature. Redefinition replaces the previous one.
    pub fn define_rule(&mut self, name: impl Into<String>, param: impl Into<String>) {
        self.rules.insert(name.into(), param.into());
    }

    pub fn is_rule_defined(&self, name: &str) -> bool {
        self.rule_param(name).is_some()
    }

    /// Formal parameter of a rule, looked up through ancestors
    pub fn rule_param(&self, name: &str) -> Option<&str> {
        match self.rules.get(name) {
            Some(param) => Some(param.as_str()),
            None => self.parent.and_then(|parent| parent.rule_param(name)),
        }
    }

    /// Bind a variable. No uniqueness check; the latest binding wins.
    pub fn define_var(&mut self, name: impl Into<String>, expr: Expr) {
        self.vars.insert(name.into(), expr);
    }

    pub fn lookup_var(&self, name: &str) -> Option<&Expr> {
        match self.vars.get(name) {
            Some(expr) => Some(expr),
            None => self.parent.and_then(|parent| parent.lookup_var(name)),
        }
    }

    pub fn is_var_defined(&self, name: &str) -> bool {
        self.lookup_var(name).is_some()
    }
}

impl Default for Scope<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Span;
    use crate::frontend::ast::Literal;

    fn int(v: i64) -> Expr {
        Expr::value(Literal::Int(v), Span::default())
    }

    #[test]
    fn test_define_and_lookup_rule() {
        let mut scope = Scope::new();
        assert!(!scope.is_rule_defined("F"));

        scope.define_rule("F", "n");
        assert!(scope.is_rule_defined("F"));
        assert_eq!(scope.rule_param("F"), Some("n"));
        assert!(!scope.is_rule_defined("f"));
    }

    #[test]
    fn test_rule_redefinition_last_wins() {
        let mut scope = Scope::new();
        scope.define_rule("F", "n");
        scope.define_rule("F", "len");
        assert_eq!(scope.rule_param("F"), Some("len"));
    }

    #[test]
    fn test_var_rebinding_last_wins() {
        let mut scope = Scope::new();
        scope.define_var("size", int(1));
        scope.define_var("size", int(2));
        assert_eq!(scope.lookup_var("size"), Some(&int(2)));
        assert!(!scope.is_var_defined("other"));
    }

    #[test]
    fn test_child_sees_parent() {
        let mut prelude = Scope::new();
        prelude.define_rule("Koch", "n");
        prelude.define_var("unit", int(5));

        let mut child = Scope::with_parent(&prelude);
        child.define_rule("F", "n");

        assert!(child.is_rule_defined("Koch"));
        assert!(child.is_rule_defined("F"));
        assert!(child.is_var_defined("unit"));
        assert!(!prelude.is_rule_defined("F"));
    }

    #[test]
    fn test_child_shadows_parent() {
        let mut prelude = Scope::new();
        prelude.define_rule("F", "outer");

        let mut child = Scope::with_parent(&prelude);
        child.define_rule("F", "inner");

        assert_eq!(child.rule_param("F"), Some("inner"));
        assert_eq!(prelude.rule_param("F"), Some("outer"));
    }
}
