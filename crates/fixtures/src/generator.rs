use rand::distr::{Distribution, Uniform};
use rand::RngExt;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use trobust_core::{Allocation, IsolationLevel, Operation, Template, TemplateSet};

/// Parameters controlling a random [`TemplateSet`] generation run.
///
/// Variables, relations and attributes are all plain `u64` ids sampled
/// uniformly in `0..n_*`, not human-readable names -- the generator exists to
/// stress [`crate::generator::generate_template_set`]'s callers with
/// arbitrary conflict shapes, not to model a specific application domain
/// (that role is filled by [`crate::smallbank`]).
#[derive(Clone, Debug, Default, Deserialize, Serialize, TypedBuilder)]
pub struct GenParams {
    pub id: u64,
    pub n_templates: u64,
    pub n_operations: u64,
    pub n_variables: u64,
    pub n_relations: u64,
    pub n_attributes: u64,
}

/// Generate a single [`TemplateSet`] of `params.n_templates` templates, each
/// with `params.n_operations` operations over `params.n_variables` variables
/// and `params.n_relations` relations. Every operation reads one attribute
/// and, with even odds, also writes a second one.
///
/// # Panics
///
/// Panics if `n_variables`, `n_relations` or `n_attributes` is zero (cannot
/// build a uniform distribution over an empty range).
#[must_use]
pub fn generate_template_set(params: &GenParams) -> TemplateSet<u64, u64, u64, u64> {
    let mut random_generator = rand::rng();
    let variable_range = Uniform::new(0, params.n_variables).unwrap();
    let relation_range = Uniform::new(0, params.n_relations).unwrap();
    let attribute_range = Uniform::new(0, params.n_attributes).unwrap();

    let templates = (0..params.n_templates)
        .map(|t_id| {
            let operations = (0..params.n_operations)
                .map(|_| {
                    let variable = variable_range.sample(&mut random_generator);
                    let relation = relation_range.sample(&mut random_generator);
                    let read_attr = attribute_range.sample(&mut random_generator);
                    if random_generator.random::<bool>() {
                        let write_attr = attribute_range.sample(&mut random_generator);
                        Operation::read_write(variable, relation, [read_attr], [write_attr])
                    } else {
                        Operation::read(variable, relation, [read_attr])
                    }
                })
                .collect();
            Template::new(t_id, operations)
        })
        .collect::<Vec<_>>();

    TemplateSet::new(templates)
}

/// Generate `n` independent [`TemplateSet`]s in parallel, one per id in
/// `0..n`, each otherwise sharing `params`.
#[must_use]
pub fn generate_many_template_sets(n: u64, params: &GenParams) -> Vec<TemplateSet<u64, u64, u64, u64>> {
    (0..n)
        .into_par_iter()
        .map(|id| {
            generate_template_set(&GenParams {
                id,
                ..params.clone()
            })
        })
        .collect()
}

/// Generate a random [`Allocation`] over `template_set`, sampling each
/// template's level uniformly from the three [`IsolationLevel`]s
/// independently.
///
/// # Panics
///
/// Never in practice: the mapping is built from `template_set.names()`, so
/// its domain always matches `template_set` and [`Allocation::new`] always
/// succeeds.
#[must_use]
pub fn generate_allocation<Name, Variable, Relation, Attribute>(
    template_set: &TemplateSet<Name, Variable, Relation, Attribute>,
) -> Allocation<Name>
where
    Name: Eq + Ord + core::hash::Hash + Clone,
    Variable: Eq + core::hash::Hash,
    Relation: Eq + core::hash::Hash,
    Attribute: Eq + Ord,
{
    let mut random_generator = rand::rng();
    let levels = [IsolationLevel::ReadCommitted, IsolationLevel::SnapshotIsolation, IsolationLevel::Serializable];
    let level_range = Uniform::new(0, levels.len()).unwrap();

    let mapping = template_set
        .names()
        .into_iter()
        .map(|name| (name, levels[level_range.sample(&mut random_generator)]))
        .collect();

    Allocation::new(template_set, mapping).expect("mapping was built from template_set.names(), so its domain always matches")
}
