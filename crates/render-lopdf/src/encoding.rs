/// Encodes `s` for a WinAnsiEncoding simple font; unmappable characters become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .filter(|c| !c.is_control())
        .map(|c| match c as u32 {
            0x20..=0x7e | 0xa0..=0xff => c as u8,
            _ => win_ansi_extra(c).unwrap_or(b'?'),
        })
        .collect()
}

/// The typographic characters WinAnsi places in `0x80..=0x9f`.
fn win_ansi_extra(c: char) -> Option<u8> {
    let byte = match c {
        '€' => 0x80,
        '‚' => 0x82,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‰' => 0x89,
        'Š' => 0x8a,
        'Œ' => 0x8c,
        'Ž' => 0x8e,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '™' => 0x99,
        'š' => 0x9a,
        'œ' => 0x9c,
        'ž' => 0x9e,
        'Ÿ' => 0x9f,
        _ => return None,
    };
    Some(byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_and_latin1_pass_through() {
        assert_eq!(to_win_ansi("Abc 123"), b"Abc 123".to_vec());
        assert_eq!(to_win_ansi("Arrêt"), vec![b'A', b'r', b'r', 0xea, b't']);
    }

    #[test]
    fn test_typographic_punctuation() {
        assert_eq!(to_win_ansi("l’arrêt — “x”"), vec![
            b'l', 0x92, b'a', b'r', b'r', 0xea, b't', b' ', 0x97, b' ', 0x93, b'x', 0x94
        ]);
    }

    #[test]
    fn test_unmappable_and_control() {
        assert_eq!(to_win_ansi("a\u{4e2d}b\n"), b"a?b".to_vec());
    }
}
