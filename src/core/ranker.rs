use crate::domain::model::Contact;

/// Orders contacts by ascending birthday day-of-month using a top-down merge
/// sort. The sort is stable: contacts sharing a day keep their relative input
/// order, which later scheduling relies on as a deterministic fixed point.
pub fn rank(contacts: Vec<Contact>) -> Vec<Contact> {
    let n = contacts.len();
    if n <= 1 {
        return contacts;
    }
    let mut left = contacts;
    let right = left.split_off(n / 2);
    merge(rank(left), rank(right))
}

/// Merges two day-ordered runs. Ties take from the left run first, which is
/// what makes the overall sort stable.
fn merge(a: Vec<Contact>, b: Vec<Contact>) -> Vec<Contact> {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    let mut a = a.into_iter();
    let mut b = b.into_iter();
    let mut next_a = a.next();
    let mut next_b = b.next();

    loop {
        match (next_a.take(), next_b.take()) {
            (Some(x), Some(y)) => {
                if x.birthday.day <= y.birthday.day {
                    merged.push(x);
                    next_a = a.next();
                    next_b = Some(y);
                } else {
                    merged.push(y);
                    next_b = b.next();
                    next_a = Some(x);
                }
            }
            (Some(x), None) => {
                merged.push(x);
                merged.extend(a);
                break;
            }
            (None, Some(y)) => {
                merged.push(y);
                merged.extend(b);
                break;
            }
            (None, None) => break,
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::BirthDate;

    fn contact(name: &str, day: u32) -> Contact {
        Contact {
            name: name.to_string(),
            phone: "5551234567".to_string(),
            birthday: BirthDate { month: 3, day },
            raw: vec![],
        }
    }

    fn days(contacts: &[Contact]) -> Vec<u32> {
        contacts.iter().map(|c| c.birthday.day).collect()
    }

    fn names(contacts: &[Contact]) -> Vec<String> {
        contacts.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn test_empty_and_singleton_unchanged() {
        assert!(rank(vec![]).is_empty());
        let ranked = rank(vec![contact("only", 17)]);
        assert_eq!(names(&ranked), vec!["only"]);
    }

    #[test]
    fn test_orders_by_day() {
        let input = vec![
            contact("c", 20),
            contact("a", 3),
            contact("d", 28),
            contact("b", 11),
        ];
        let ranked = rank(input);
        assert_eq!(days(&ranked), vec![3, 11, 20, 28]);
        assert_eq!(names(&ranked), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_idempotent_on_sorted_input() {
        let sorted = rank(vec![
            contact("a", 1),
            contact("b", 9),
            contact("c", 15),
            contact("d", 30),
        ]);
        let resorted = rank(sorted.clone());
        assert_eq!(names(&sorted), names(&resorted));
        assert_eq!(days(&sorted), days(&resorted));
    }

    #[test]
    fn test_stable_on_equal_days() {
        let input = vec![
            contact("first", 10),
            contact("second", 10),
            contact("third", 10),
            contact("early", 2),
        ];
        let ranked = rank(input);
        assert_eq!(names(&ranked), vec!["early", "first", "second", "third"]);
    }

    #[test]
    fn test_stable_with_interleaved_days() {
        let input = vec![
            contact("x1", 5),
            contact("y1", 3),
            contact("x2", 5),
            contact("y2", 3),
        ];
        let ranked = rank(input);
        assert_eq!(names(&ranked), vec!["y1", "y2", "x1", "x2"]);
    }

    fn permutations(items: Vec<u32>) -> Vec<Vec<u32>> {
        if items.len() <= 1 {
            return vec![items];
        }
        let mut result = Vec::new();
        for i in 0..items.len() {
            let mut rest = items.clone();
            let picked = rest.remove(i);
            for mut tail in permutations(rest) {
                tail.insert(0, picked);
                result.push(tail);
            }
        }
        result
    }

    #[test]
    fn test_all_permutations_of_distinct_days() {
        for perm in permutations(vec![2, 7, 19, 26]) {
            let input: Vec<Contact> = perm
                .iter()
                .map(|&day| contact(&format!("day-{}", day), day))
                .collect();
            let ranked = rank(input);
            assert_eq!(days(&ranked), vec![2, 7, 19, 26], "input order {:?}", perm);
        }
    }
}
