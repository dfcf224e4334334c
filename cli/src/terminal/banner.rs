pub const NPARSER: &str = r#"
    _   ______
   / | / / __ \____ ______________  _____
  /  |/ / /_/ / __ `/ ___/ ___/ _ \/ ___/
 / /|  / ____/ /_/ / /  (__  )  __/ /
/_/ |_/_/    \__,_/_/  /____/\___/_/
"#;

pub const URLBUST: &str = r#"
               __               __
  __  _______/ /_  __  _______/ /_
 / / / / ___/ / __ \/ / / / ___/ __/
/ /_/ / /  / / /_/ / /_/ (__  ) /_
\__,_/_/  /_/_.___/\__,_/____/\__/
"#;
