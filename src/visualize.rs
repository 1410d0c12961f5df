//! Graphviz DOT export.
//!
//! The output is meant for people and rendering tools; its exact layout is
//! not a parsing contract.

use crate::core::State;
use crate::engine::StateMachine;
use std::fmt::Write as _;

impl<S: State> StateMachine<S> {
    /// Render the machine as a DOT digraph.
    ///
    /// Every state that appears in a rule, plus the current state, becomes a
    /// node; the current state is drawn as a double circle and final states
    /// in bold. Each rule becomes an edge labelled with its event kind,
    /// suffixed with ` [guard]` when guarded.
    pub fn to_dot(&self) -> String {
        let inner = self.read();

        let nodes = inner
            .transitions
            .rules()
            .flat_map(|rule| [&rule.from, &rule.to])
            .chain(std::iter::once(&inner.current));
        let mut states: Vec<&S> = Vec::new();
        for state in nodes {
            if !states.contains(&state) {
                states.push(state);
            }
        }

        let mut dot = String::new();
        dot.push_str("digraph StateMachine {\n");
        dot.push_str("    rankdir=LR;\n");
        dot.push_str("    node [shape = circle];\n");

        for state in &states {
            let mut attrs = Vec::new();
            if **state == inner.current {
                attrs.push("shape=doublecircle");
            }
            if state.is_final() {
                attrs.push("style=bold");
            }
            if attrs.is_empty() {
                let _ = writeln!(dot, "    \"{}\";", escape(state.name()));
            } else {
                let _ = writeln!(dot, "    \"{}\" [{}];", escape(state.name()), attrs.join(", "));
            }
        }

        for rule in inner.transitions.rules() {
            let mut label = escape(&rule.event_kind);
            if rule.is_guarded() {
                label.push_str(" [guard]");
            }
            let _ = writeln!(
                dot,
                "    \"{}\" -> \"{}\" [ label = \"{}\" ];",
                escape(rule.from.name()),
                escape(rule.to.name()),
                label
            );
        }

        dot.push_str("}\n");
        dot
    }
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
