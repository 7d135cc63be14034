use greeter::Greeter;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_add_matches_checked_sum(a in any::<i32>(), b in any::<i32>()) {
        let greeter = Greeter::new();
        if let Some(sum) = a.checked_add(b) {
            prop_assert_eq!(greeter.add_two_numbers(a, b), sum);
        }
    }

    #[test]
    fn test_add_wraps(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(Greeter::new().add_two_numbers(a, b), a.wrapping_add(b));
    }

    #[test]
    fn test_add_is_commutative(a in any::<i32>(), b in any::<i32>()) {
        let greeter = Greeter::new();
        prop_assert_eq!(greeter.add_two_numbers(a, b), greeter.add_two_numbers(b, a));
    }

    #[test]
    fn test_greeting_round_trip(greeting in "[^\r\n]*") {
        let mut greeter = Greeter::new();
        greeter.set_greeting(greeting.clone());
        prop_assert_eq!(greeter.greeting(), greeting.as_str());

        let mut buf = Vec::new();
        greeter.write_greeting(&mut buf).unwrap();
        prop_assert_eq!(String::from_utf8(buf).unwrap(), format!("{}\n", greeting));
    }
}
