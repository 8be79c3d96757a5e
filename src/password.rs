//! Password-eligibility rules over six-digit numbers. A leaf computation
//! independent of the virtual machine.

/// Decimal digits of `number`, most significant first.
fn digits(mut number: u32) -> Vec<u8> {
  let mut digits = Vec::new();
  while number > 0 {
    digits.push((number % 10) as u8);
    number /= 10;
  }
  digits.reverse();
  digits
}

fn is_six_digits(number: u32) -> bool {
  (100_000..=999_999).contains(&number)
}

/// A password is eligible when it has six digits, some adjacent pair of
/// digits is equal, and the digits never decrease from left to right.
pub fn is_eligible(number: u32) -> bool {
  if !is_six_digits(number) {
    return false;
  }
  let digits = digits(number);
  let mut adjacent_match = false;
  let mut ascending = true;
  for pair in digits.windows(2) {
    if pair[0] == pair[1] {
      adjacent_match = true;
    }
    if pair[0] > pair[1] {
      ascending = false;
    }
  }
  adjacent_match && ascending
}

/// The stricter rule: the adjacent pair must not be part of a larger group
/// of the same digit. With never-decreasing digits every digit forms one
/// run, so this is a run of length exactly two.
pub fn is_eligible_strict(number: u32) -> bool {
  if !is_six_digits(number) {
    return false;
  }
  let digits = digits(number);
  if digits.windows(2).any(|pair| pair[0] > pair[1]) {
    return false;
  }
  let mut run = 1;
  for pair in digits.windows(2) {
    if pair[0] == pair[1] {
      run += 1;
    } else {
      if run == 2 {
        return true;
      }
      run = 1;
    }
  }
  run == 2
}

/// Counts the numbers in `[low, high)` passing `rule`.
pub fn count_eligible(low: u32, high: u32, rule: fn(u32) -> bool) -> usize {
  (low..high).filter(|&number| rule(number)).count()
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn eligible_needs_a_pair_and_no_decrease() {
    assert!(is_eligible(111111));
    assert!(!is_eligible(223450)); // decreasing 5 -> 0
    assert!(!is_eligible(123789)); // no adjacent pair
    assert!(!is_eligible(99999));  // five digits
  }

  #[test]
  fn strict_rule_rejects_larger_groups() {
    assert!(is_eligible_strict(112233));
    assert!(!is_eligible_strict(123444)); // the 444 group swallows the pair
    assert!(is_eligible_strict(111122)); // 22 stands alone
  }

  #[test]
  fn strict_implies_eligible() {
    for number in 372_304..380_000 {
      if is_eligible_strict(number) {
        assert!(is_eligible(number));
      }
    }
  }

  #[test]
  fn counting_applies_the_given_rule() {
    // 111111..=111129: 111111 and any non-decreasing paired successors.
    let count = count_eligible(111_111, 111_130, is_eligible);
    assert!(count > 0);
    assert!(count_eligible(111_111, 111_130, is_eligible_strict) <= count);
  }
}
