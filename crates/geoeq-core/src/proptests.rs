//! Property-based tests for unknown naming.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::VarId;

    fn decode(name: &str) -> u32 {
        let mut chars = name.chars();
        let letter = chars.next().expect("empty name");
        let suffix: String = chars.collect();
        let cycle = if suffix.is_empty() {
            0
        } else {
            suffix.parse::<u32>().expect("numeric suffix")
        };
        cycle * 26 + (letter as u32 - 'a' as u32)
    }

    proptest! {
        #[test]
        fn names_are_bijective(index in 0u32..100_000) {
            prop_assert_eq!(decode(&VarId::new(index).name()), index);
        }

        #[test]
        fn names_cycle_the_alphabet(cycle in 0u32..1000, offset in 0u32..26) {
            let name = VarId::new(cycle * 26 + offset).name();
            let letter = char::from(b'a' + offset as u8);
            let expected = if cycle == 0 {
                letter.to_string()
            } else {
                format!("{letter}{cycle}")
            };
            prop_assert_eq!(name, expected);
        }
    }
}
