//! Kripke models: worlds, valuations, and accessibility relations.
//!
//! A model is built once --- programatically, or by [read_model] from the `.kripke` text format --- and is immutable for the duration of any evaluation.
//!
//! Internally a world is an index into the model's world table, assigned in order of declaration; see [world](crate::structures::world).
//! The valuation is stored per world as the set of proposition names true there: a proposition absent from the set is false at that world.
//! Each accessibility relation is stored per world as a sorted vector of successor indices, so a successor query is a slice borrow.
//! No shape is assumed of a relation --- no reflexivity, symmetry, or transitivity.
//!
//! The shape invariant: every world a relation or valuation mentions is a declared world.
//! The building methods take world names and enforce the invariant at the point of construction, so an evaluation never encounters an undeclared world.

mod read;
pub use read::read_model;

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::{
    structures::{formula::Agent, world::World},
    types::err::ModelShapeError,
};

static NO_SUCCESSORS: &[World] = &[];

/// A finite Kripke model.
#[derive(Clone, Debug, Default)]
pub struct KripkeModel {
    /// World names, by index.
    names: Vec<String>,

    /// World indices, by name.
    index: HashMap<String, World>,

    /// For each world, the set of proposition names true there.
    valuations: Vec<BTreeSet<String>>,

    /// For each relation, for each world, the sorted successor indices.
    relations: BTreeMap<Agent, Vec<Vec<World>>>,
}

impl KripkeModel {
    /// Declares a world, returning its index.
    /// Declaring the same name twice returns the index assigned the first time.
    pub fn add_world(&mut self, name: &str) -> World {
        match self.index.get(name) {
            Some(world) => *world,

            None => {
                let world = self.names.len() as World;
                self.names.push(name.to_string());
                self.index.insert(name.to_string(), world);
                self.valuations.push(BTreeSet::new());
                world
            }
        }
    }

    /// Adds an edge to the relation of the given agent, between worlds given by name.
    pub fn add_edge(&mut self, agent: Agent, from: &str, to: &str) -> Result<(), ModelShapeError> {
        let from = self.resolve(from)?;
        let to = self.resolve(to)?;
        let count = self.names.len();

        let relation = self.relations.entry(agent).or_default();
        if relation.len() < count {
            relation.resize_with(count, Vec::new);
        }

        let successors = &mut relation[from as usize];
        if let Err(slot) = successors.binary_search(&to) {
            successors.insert(slot, to);
        }

        Ok(())
    }

    /// Marks a proposition true at each of the given worlds.
    pub fn add_valuation<'a>(
        &mut self,
        proposition: &str,
        worlds: impl IntoIterator<Item = &'a str>,
    ) -> Result<(), ModelShapeError> {
        for name in worlds {
            let world = self.resolve(name)?;
            self.valuations[world as usize].insert(proposition.to_string());
        }

        Ok(())
    }

    /// The index of the world with the given name.
    pub fn resolve(&self, name: &str) -> Result<World, ModelShapeError> {
        match self.index.get(name) {
            Some(world) => Ok(*world),
            None => Err(ModelShapeError::UnknownWorld(name.to_string())),
        }
    }

    /// The worlds of the model, as indices.
    pub fn worlds(&self) -> std::ops::Range<World> {
        0..self.names.len() as World
    }

    pub fn world_count(&self) -> usize {
        self.names.len()
    }

    /// The name of a world of this model.
    pub fn name_of(&self, world: World) -> &str {
        &self.names[world as usize]
    }

    /// The set of proposition names true at the world.
    pub fn valuation_of(&self, world: World) -> Result<&BTreeSet<String>, ModelShapeError> {
        match self.valuations.get(world as usize) {
            Some(propositions) => Ok(propositions),
            None => Err(ModelShapeError::UnknownIndex(world)),
        }
    }

    /// The worlds reachable from a world under the agent's relation, sorted.
    ///
    /// Empty --- not an error --- when the world has no outgoing edges, including when no relation carries the agent's label at all.
    pub fn successors(&self, world: World, agent: &Agent) -> &[World] {
        match self.relations.get(agent) {
            Some(relation) => relation
                .get(world as usize)
                .map(Vec::as_slice)
                .unwrap_or(NO_SUCCESSORS),

            None => NO_SUCCESSORS,
        }
    }
}

impl std::fmt::Display for KripkeModel {
    /// The model in the `.kripke` surface syntax.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "W = {{{}}};", self.names.join(", "))?;

        for (agent, relation) in &self.relations {
            let mut pairs = Vec::new();
            for (from, successors) in relation.iter().enumerate() {
                for to in successors {
                    pairs.push(format!("({}, {})", self.names[from], self.name_of(*to)));
                }
            }

            match agent {
                Agent::Default => writeln!(f, "R = {{{}}};", pairs.join(", "))?,
                Agent::Named(label) => writeln!(f, "R[{label}] = {{{}}};", pairs.join(", "))?,
            }
        }

        let mut by_proposition: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (world, propositions) in self.valuations.iter().enumerate() {
            for proposition in propositions {
                by_proposition
                    .entry(proposition)
                    .or_default()
                    .push(&self.names[world]);
            }
        }

        for (proposition, worlds) in by_proposition {
            writeln!(f, "V({proposition}) = {{{}}};", worlds.join(", "))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worlds_index_in_declaration_order() {
        let mut model = KripkeModel::default();

        assert_eq!(model.add_world("w0"), 0);
        assert_eq!(model.add_world("w1"), 1);
        assert_eq!(model.add_world("w0"), 0);
        assert_eq!(model.world_count(), 2);
    }

    #[test]
    fn successors_are_sorted_and_deduplicated() {
        let mut model = KripkeModel::default();
        model.add_world("a");
        model.add_world("b");
        model.add_world("c");

        model.add_edge(Agent::Default, "a", "c").unwrap();
        model.add_edge(Agent::Default, "a", "b").unwrap();
        model.add_edge(Agent::Default, "a", "c").unwrap();

        assert_eq!(model.successors(0, &Agent::Default), &[1, 2]);
        assert_eq!(model.successors(1, &Agent::Default), &[] as &[World]);
    }

    #[test]
    fn unknown_worlds_are_rejected_at_construction() {
        let mut model = KripkeModel::default();
        model.add_world("a");

        assert_eq!(
            model.add_edge(Agent::Default, "a", "b"),
            Err(ModelShapeError::UnknownWorld("b".to_string())),
        );
        assert_eq!(
            model.add_valuation("p", ["z"]),
            Err(ModelShapeError::UnknownWorld("z".to_string())),
        );
    }

    #[test]
    fn unlabelled_relations_are_empty() {
        let mut model = KripkeModel::default();
        model.add_world("a");

        let absent = Agent::Named("nobody".to_string());
        assert!(model.successors(0, &absent).is_empty());
    }
}
