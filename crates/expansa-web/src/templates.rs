//! Page templates, compiled into the binary.
//!
//! Templates ending in `.html` are auto-escaped, so query values echoed back
//! into a page are safe to interpolate.

use minijinja::Environment;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html",       include_str!("../templates/base.html")),
    ("nav.html",        include_str!("../templates/nav.html")),
    ("dashboard.html",  include_str!("../templates/dashboard.html")),
    ("detail.html",     include_str!("../templates/detail.html")),
    ("network.html",    include_str!("../templates/network.html")),
    ("landscape.html",  include_str!("../templates/landscape.html")),
    ("request.html",    include_str!("../templates/request.html")),
];

pub fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    for &(name, source) in TEMPLATES {
        env.add_template(name, source)?;
    }
    Ok(env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_templates_parse() {
        let env = environment().unwrap();
        for &(name, _) in TEMPLATES {
            assert!(env.get_template(name).is_ok(), "{name}");
        }
    }
}
