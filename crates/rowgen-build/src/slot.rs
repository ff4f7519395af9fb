use crate::error::EmitError;
use rowgen_schema::naming::ConstName;

///
/// Slot
///
/// One position in the generated `PROPERTIES` array, bound to the constant
/// that fills it and the stage that asked for it.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Slot {
    pub index: usize,
    pub constant: ConstName,
    pub owner: &'static str,
}

///
/// SlotAllocator
///
/// Hands out `PROPERTIES` indices sequentially. Stages never compute an
/// index themselves, so the array length is always the number of bound
/// slots.
///

#[derive(Clone, Debug, Default)]
pub struct SlotAllocator {
    slots: Vec<Slot>,
}

impl SlotAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the next free index to `constant`.
    pub fn reserve(&mut self, owner: &'static str, constant: ConstName) -> Result<usize, EmitError> {
        if self.slots.iter().any(|s| s.constant == constant) {
            return Err(EmitError::DuplicateSlot(constant));
        }

        let index = self.slots.len();
        self.slots.push(Slot {
            index,
            constant,
            owner,
        });

        Ok(index)
    }

    /// Length of the generated properties array.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    /// Slots reserved by one stage, in index order.
    pub fn owned_by(&self, owner: &str) -> impl Iterator<Item = &Slot> {
        self.slots.iter().filter(move |s| s.owner == owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rowgen_schema::naming::constant_name;

    #[test]
    fn indices_are_sequential_across_owners() {
        let mut slots = SlotAllocator::new();

        assert_eq!(slots.reserve("base", constant_name("_id")).unwrap(), 0);
        assert_eq!(slots.reserve("base", constant_name("title")).unwrap(), 1);
        assert_eq!(slots.reserve("sync", constant_name("origin_id")).unwrap(), 2);

        let sync: Vec<_> = slots.owned_by("sync").map(|s| s.index).collect();
        assert_eq!(sync, [2]);
        assert_eq!(slots.len(), 3);
    }

    #[test]
    fn rejects_second_slot_for_constant() {
        let mut slots = SlotAllocator::new();
        slots.reserve("base", constant_name("title")).unwrap();

        assert_eq!(
            slots.reserve("sync", constant_name("title")),
            Err(EmitError::DuplicateSlot(constant_name("title")))
        );
        assert_eq!(slots.len(), 1);
    }

    proptest! {
        #[test]
        fn every_index_below_len_is_bound(count in 0usize..64) {
            let mut slots = SlotAllocator::new();
            for i in 0..count {
                slots.reserve("base", constant_name(&format!("column_{i}"))).unwrap();
            }

            prop_assert_eq!(slots.len(), count);
            for (expected, slot) in slots.iter().enumerate() {
                prop_assert_eq!(slot.index, expected);
            }
        }
    }
}
