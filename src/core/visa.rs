use crate::domain::VisaPosture;

/// Passport details are only collected when the guest needs help obtaining a
/// visa and asked for an invitation letter.
pub fn is_passport_required(posture: VisaPosture, wants_invitation_letter: bool) -> bool {
    matches!(posture, VisaPosture::NeedsHelp) && wants_invitation_letter
}

/// Whether the stored booking should be flagged for an invitation letter.
pub fn needs_invitation(posture: VisaPosture, wants_invitation_letter: bool) -> bool {
    is_passport_required(posture, wants_invitation_letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_needs_help_with_letter_requires_passport() {
        for posture in VisaPosture::ALL {
            for wants_letter in [true, false] {
                let expected = posture == VisaPosture::NeedsHelp && wants_letter;
                assert_eq!(
                    is_passport_required(posture, wants_letter),
                    expected,
                    "posture={posture} wants_letter={wants_letter}"
                );
            }
        }
    }

    #[test]
    fn letter_flag_is_ignored_without_needs_help() {
        assert!(!needs_invitation(VisaPosture::HasVisa, true));
        assert!(!needs_invitation(VisaPosture::NoVisaNeeded, true));
    }
}
