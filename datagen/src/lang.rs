/// Turns a lowercase name into a display name
///
/// Each `%s` in `template` takes the next argument and `%%` becomes `%`, but only when `args`
/// is not empty. Underscores and slashes become spaces, then every word is title cased.
///
/// ```
/// # use ntp_datagen::lang::lang;
/// assert_eq!(lang("%s cobblestone %s", &["granite", "stairs"]), "Granite Cobblestone Stairs");
/// assert_eq!(lang("ceramic_water_bucket", &[]), "Ceramic Water Bucket");
/// ```
pub fn lang(template: &str, args: &[&str]) -> String {
    let formatted = if args.is_empty() {
        template.to_owned()
    } else {
        substitute(template, args)
    };

    title_case(&formatted.replace('_', " ").replace('/', " "))
}

fn substitute(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        match chars.peek() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some('s') => {
                chars.next();
                match args.next() {
                    Some(arg) => out.push_str(arg),
                    None => out.push_str("%s"),
                }
            }
            _ => out.push('%'),
        }
    }

    out
}

// A letter directly after another letter is lowercased, every other letter starts a word
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut after_letter = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if after_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            after_letter = true;
        } else {
            out.push(c);
            after_letter = false;
        }
    }

    out
}

#[test]
fn plain_names() {
    assert_eq!(lang("granite cobblestone", &[]), "Granite Cobblestone");
    assert_eq!(lang("worked clay", &[]), "Worked Clay");
    assert_eq!(lang("", &[]), "");
}

#[test]
fn arguments_fill_placeholders_in_order() {
    assert_eq!(lang("%s cobblestone", &["granite"]), "Granite Cobblestone");
    assert_eq!(lang("%s loose rock", &["red_sandstone"]), "Red Sandstone Loose Rock");
    assert_eq!(lang("%s %s", &["flint"]), "Flint %S");
    assert_eq!(lang("100%% %s", &["clay"]), "100% Clay");
}

#[test]
fn separators_and_casing() {
    assert_eq!(lang("blocks/clay_large_vessel", &[]), "Blocks Clay Large Vessel");
    assert_eq!(lang("MACUAHUITL", &[]), "Macuahuitl");
    assert_eq!(lang("you're a potter", &[]), "You'Re A Potter");
}

#[test]
fn idempotent_on_title_case() {
    for name in ["Andesite Cobblestone Wall", "Flint Knife", "Ceramic Large Vessel"] {
        assert_eq!(lang(name, &[]), name);
        assert_eq!(lang(&lang(name, &[]), &[]), name);
    }
}
