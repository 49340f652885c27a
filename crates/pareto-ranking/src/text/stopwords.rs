/// Indonesian function words that carry no problem-specific meaning.
pub fn is_stop_word(word: &str) -> bool {
    matches!(
        word,
        "yang"
            | "dan"
            | "di"
            | "ke"
            | "dari"
            | "untuk"
            | "dengan"
            | "pada"
            | "adalah"
            | "ini"
            | "itu"
            | "atau"
            | "tidak"
            | "ada"
            | "oleh"
            | "akan"
            | "sudah"
            | "juga"
            | "dapat"
            | "bisa"
            | "lebih"
            | "sebagai"
            | "dalam"
            | "karena"
            | "telah"
            | "saat"
            | "setelah"
            | "harus"
            | "menjadi"
            | "seperti"
            | "tersebut"
            | "belum"
            | "sehingga"
            | "namun"
            | "bila"
            | "apabila"
            | "bahwa"
            | "yaitu"
            | "antara"
            | "tetapi"
            | "tapi"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_function_words_are_stop_words() {
        for w in ["yang", "dan", "saat", "tidak", "tapi"] {
            assert!(is_stop_word(w), "{w} should be a stop word");
        }
    }

    #[test]
    fn domain_words_are_not_stop_words() {
        for w in ["kaca", "pecah", "packing", "warna"] {
            assert!(!is_stop_word(w));
        }
    }

    #[test]
    fn matching_is_case_sensitive_on_normalized_input() {
        assert!(!is_stop_word("Yang"));
    }
}
