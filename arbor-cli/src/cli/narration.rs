//! Step-by-step narration of a spanning forest run.
//!
//! The [`Narrator`] is a [`StepObserver`] that writes a readable trace of
//! every considered edge: the roots of its endpoints, the decision, the
//! current components and the partial forest. With a pause input attached it
//! waits for a line after each step and stops the run when that line is `q`.

use std::{
    fmt::Display,
    io::{self, BufRead, Write},
    ops::ControlFlow,
};

use arbor_core::{Edge, Graph, Node, Objective, SpanningForest, StepEvent, StepObserver};

const PAUSE_PROMPT: &str = "Press Enter for the next step (or 'q' to quit): ";

/// Writes a trace of a run to `W`, optionally pausing on input `R`.
#[derive(Debug)]
pub struct Narrator<W, R, N> {
    writer: W,
    pause: Option<R>,
    accepted: Vec<Edge<N>>,
    failure: Option<io::Error>,
}

impl<W: Write, N: Node + Display> Narrator<W, io::Empty, N> {
    /// Creates a narrator that never pauses.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pause: None,
            accepted: Vec::new(),
            failure: None,
        }
    }
}

impl<W: Write, R: BufRead, N: Node + Display> Narrator<W, R, N> {
    /// Creates a narrator that waits for a line from `input` after each step.
    #[must_use]
    pub fn pausing(writer: W, input: R) -> Self {
        Self {
            writer,
            pause: Some(input),
            accepted: Vec::new(),
            failure: None,
        }
    }

    /// Writes the run header and the edges in processing order.
    ///
    /// # Errors
    /// Returns any error raised by the writer.
    pub fn introduce(
        &mut self,
        graph: &Graph<N>,
        objective: Objective,
        order: &[&Edge<N>],
    ) -> io::Result<()> {
        writeln!(
            self.writer,
            "Running Kruskal ({objective}) on a graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count(),
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Sorted edges (u, v, weight):")?;
        for (position, edge) in order.iter().enumerate() {
            writeln!(
                self.writer,
                "  {:>2}. ({}, {}, {})",
                position.saturating_add(1),
                edge.source(),
                edge.target(),
                edge.weight(),
            )?;
        }
        writeln!(self.writer)?;
        self.writer.flush()
    }

    /// Writes the closing verdict for `forest` and returns the writer.
    ///
    /// # Errors
    /// Returns the first error raised while narrating steps, or any error
    /// raised while writing the verdict.
    pub fn conclude(mut self, forest: &SpanningForest<N>) -> io::Result<W> {
        if let Some(err) = self.failure.take() {
            return Err(err);
        }
        if !forest.is_complete() {
            writeln!(
                self.writer,
                "Stopped early: the partial forest has {} components.",
                forest.component_count(),
            )?;
        } else if forest.is_tree() {
            writeln!(self.writer, "Spanning tree obtained (the graph is connected).")?;
        } else if forest.node_count() == 0 {
            writeln!(self.writer, "The graph has no nodes.")?;
        } else {
            writeln!(
                self.writer,
                "The graph is not connected: {} separate components. Obtained a {} spanning forest.",
                forest.component_count(),
                forest.objective(),
            )?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn narrate(&mut self, event: &StepEvent<N>) -> io::Result<ControlFlow<()>> {
        let edge = event.edge();
        writeln!(
            self.writer,
            "Step {}: consider edge ({}, {}, {}) -> roots: {}, {}",
            event.step(),
            edge.source(),
            edge.target(),
            edge.weight(),
            event.source_root(),
            event.target_root(),
        )?;
        if event.decision().is_accepted() {
            self.accepted.push(edge.clone());
            writeln!(
                self.writer,
                "  => added. Accumulated weight: {}",
                event.total_weight()
            )?;
        } else {
            writeln!(self.writer, "  => omitted (would create a cycle)")?;
        }
        self.write_components(event)?;
        self.write_partial_forest()?;
        self.wait_for_input()
    }

    fn write_components(&mut self, event: &StepEvent<N>) -> io::Result<()> {
        let Some(components) = event.components() else {
            return Ok(());
        };
        let rendered: Vec<String> = components
            .iter()
            .map(|(root, members)| {
                let members: Vec<String> = members.iter().map(ToString::to_string).collect();
                format!("{root}:{{{}}}", members.join(","))
            })
            .collect();
        writeln!(
            self.writer,
            "  Components ({}): {}",
            components.len(),
            rendered.join(", ")
        )
    }

    fn write_partial_forest(&mut self) -> io::Result<()> {
        if self.accepted.is_empty() {
            return writeln!(self.writer, "  Partial forest: (empty)");
        }
        let rendered: Vec<String> = self
            .accepted
            .iter()
            .map(|edge| format!("({},{}:{})", edge.source(), edge.target(), edge.weight()))
            .collect();
        writeln!(self.writer, "  Partial forest: {}", rendered.join(", "))
    }

    fn wait_for_input(&mut self) -> io::Result<ControlFlow<()>> {
        let Some(input) = self.pause.as_mut() else {
            writeln!(self.writer)?;
            return Ok(ControlFlow::Continue(()));
        };
        write!(self.writer, "{PAUSE_PROMPT}")?;
        self.writer.flush()?;
        let mut line = String::new();
        input.read_line(&mut line)?;
        if line.trim().eq_ignore_ascii_case("q") {
            writeln!(self.writer, "Run interrupted by the user.")?;
            writeln!(self.writer)?;
            return Ok(ControlFlow::Break(()));
        }
        writeln!(self.writer)?;
        Ok(ControlFlow::Continue(()))
    }
}

impl<W: Write, R: BufRead, N: Node + Display> StepObserver<N> for Narrator<W, R, N> {
    fn on_step(&mut self, event: &StepEvent<N>) -> ControlFlow<()> {
        match self.narrate(event) {
            Ok(flow) => flow,
            Err(err) => {
                self.failure = Some(err);
                ControlFlow::Break(())
            }
        }
    }
}
