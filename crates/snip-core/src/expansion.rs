/// Substitute positional `$N` placeholders in a snippet value.
///
/// Each `$` followed by decimal digits names a 1-based argument; occurrences
/// with a matching argument are replaced by its text, the rest stay literal.
/// The template is scanned once left to right and replacement text is emitted
/// verbatim, so an argument containing `$2` is never expanded again. There is
/// no way to escape a `$N` whose argument was supplied.
pub fn expand(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let digits = after.chars().take_while(char::is_ascii_digit).count();

        let index = after[..digits]
            .parse::<usize>()
            .ok()
            .filter(|&n| n >= 1 && n <= args.len());

        match index {
            Some(n) => {
                out.push_str(&args[n - 1]);
                rest = &after[digits..];
            }
            None => {
                out.push('$');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
