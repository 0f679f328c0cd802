/*!
(The internal representation of) a world of a Kripke model.

Broadly, worlds are the things at which a formula is or is not satisfied.
- 'Internal' worlds are indices into the world table of a [model](crate::model::KripkeModel), assigned once in order of declaration.
- 'External' worlds are the identifiers used when building a model or reading one from text, and when reporting results.

Each internal world is a u32 *w* such that either *w* is 0 or *w - 1* is a world, so the worlds of a model are [0..*m*) for some *m*.

This representation allows worlds to be used as the indices of a structure, e.g. `valuations[w]`, and makes equality and set operations cheap.
The external name of a world is stored in the model and recovered with [name_of](crate::model::KripkeModel::name_of).
*/

/// A world of a Kripke model, as an index into the model's world table.
pub type World = u32;
