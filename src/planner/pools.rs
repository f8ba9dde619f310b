//! Equipment filter: per-category candidate pools.
//!
//! A candidate is eligible iff its required equipment is owned by the
//! user or is the bodyweight sentinel. Pools keep catalog order.
//! An empty pool is a normal outcome meaning "category unavailable".

use std::collections::BTreeSet;

use crate::models::{Category, Equipment, ExerciseCatalog, ExerciseRecord};

/// Exercises of `category` usable with `owned` equipment (plus bodyweight).
pub fn candidates<'a>(
    catalog: &'a ExerciseCatalog,
    category: Category,
    owned: &BTreeSet<Equipment>,
) -> Vec<&'a ExerciseRecord> {
    catalog
        .exercises(category)
        .iter()
        .filter(|r| r.equipment.is_bodyweight() || owned.contains(&r.equipment))
        .collect()
}

/// Candidate pools for all three categories, computed once per run.
#[derive(Debug, Clone)]
pub struct CandidatePools<'a> {
    cardio: Vec<&'a ExerciseRecord>,
    strength: Vec<&'a ExerciseRecord>,
    flexibility: Vec<&'a ExerciseRecord>,
}

impl<'a> CandidatePools<'a> {
    /// Filters every category of `catalog` by `owned`.
    pub fn from_catalog(catalog: &'a ExerciseCatalog, owned: &BTreeSet<Equipment>) -> Self {
        Self {
            cardio: candidates(catalog, Category::Cardio, owned),
            strength: candidates(catalog, Category::Strength, owned),
            flexibility: candidates(catalog, Category::Flexibility, owned),
        }
    }

    /// Pool for a category.
    pub fn pool(&self, category: Category) -> &[&'a ExerciseRecord] {
        match category {
            Category::Cardio => &self.cardio,
            Category::Strength => &self.strength,
            Category::Flexibility => &self.flexibility,
        }
    }

    /// Whether a category has no eligible exercise.
    pub fn is_empty(&self, category: Category) -> bool {
        self.pool(category).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    fn names(pool: &[&ExerciseRecord]) -> Vec<String> {
        pool.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_no_equipment_is_bodyweight_only() {
        let catalog = ExerciseCatalog::reference();
        let pool = candidates(&catalog, Category::Strength, &BTreeSet::new());
        assert_eq!(
            names(&pool),
            vec!["push-ups", "squats", "plank", "burpee", "lunge", "mountain climber"]
        );
    }

    #[test]
    fn test_owned_equipment_extends_pool() {
        let catalog = ExerciseCatalog::reference();
        let owned: BTreeSet<Equipment> = [Equipment::YogaMat].into_iter().collect();
        let pool = candidates(&catalog, Category::Flexibility, &owned);
        assert_eq!(names(&pool), vec!["yoga", "stretching", "pilates", "tai chi"]);

        let pool = candidates(&catalog, Category::Flexibility, &BTreeSet::new());
        assert_eq!(names(&pool), vec!["stretching", "tai chi"]);
    }

    #[test]
    fn test_unused_equipment_has_no_effect() {
        let catalog = ExerciseCatalog::reference();
        let owned: BTreeSet<Equipment> = [Equipment::Treadmill].into_iter().collect();
        let with = candidates(&catalog, Category::Cardio, &owned);
        let without = candidates(&catalog, Category::Cardio, &BTreeSet::new());
        assert_eq!(names(&with), names(&without));
    }

    #[test]
    fn test_gated_category_yields_empty_pool() {
        let catalog = ExerciseCatalog::new()
            .with_exercise(
                Category::Strength,
                ExerciseRecord::new("deadlift", 9.0, Difficulty::Advanced)
                    .with_equipment(Equipment::Barbell),
            )
            .with_exercise(
                Category::Cardio,
                ExerciseRecord::new("running", 10.0, Difficulty::Intermediate),
            );

        let pools = CandidatePools::from_catalog(&catalog, &BTreeSet::new());
        assert!(pools.is_empty(Category::Strength));
        assert!(pools.is_empty(Category::Flexibility));
        assert_eq!(pools.pool(Category::Cardio).len(), 1);

        let owned: BTreeSet<Equipment> = [Equipment::Barbell].into_iter().collect();
        let pools = CandidatePools::from_catalog(&catalog, &owned);
        assert!(!pools.is_empty(Category::Strength));
    }

    #[test]
    fn test_explicit_none_in_owned_set() {
        let catalog = ExerciseCatalog::reference();
        let owned: BTreeSet<Equipment> = [Equipment::None].into_iter().collect();
        assert_eq!(
            candidates(&catalog, Category::Cardio, &owned).len(),
            candidates(&catalog, Category::Cardio, &BTreeSet::new()).len()
        );
    }
}
