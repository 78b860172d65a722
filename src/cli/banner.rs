//! ASCII art banner for interactive mode.

use std::io::IsTerminal;

/// ANSI true-color escape sequences for the padlock banner palette.
struct Colors {
    shackle: &'static str,
    body: &'static str,
    keyhole: &'static str,
    spark: &'static str,
    title: &'static str,
    subtitle: &'static str,
    reset: &'static str,
}

const COLOR: Colors = Colors {
    shackle: "\x1b[38;2;170;170;185m",  // Steel
    body: "\x1b[38;2;212;160;23m",      // Brass
    keyhole: "\x1b[38;2;40;40;40m",     // Near black
    spark: "\x1b[38;2;255;140;0m",      // Forge orange
    title: "\x1b[1;38;2;255;99;71m",    // Bold tomato
    subtitle: "\x1b[38;2;120;120;140m", // Gray-blue
    reset: "\x1b[0m",
};

const PLAIN: Colors = Colors {
    shackle: "",
    body: "",
    keyhole: "",
    spark: "",
    title: "",
    subtitle: "",
    reset: "",
};

/// Prints the Passforge padlock banner to stdout.
///
/// Renders ANSI true-color when stdout is a terminal,
/// falls back to plain text otherwise.
pub fn print_banner() {
    let c = if std::io::stdout().is_terminal() {
        &COLOR
    } else {
        &PLAIN
    };

    let sh = c.shackle;
    let bd = c.body;
    let kh = c.keyhole;
    let sp = c.spark;
    let tt = c.title;
    let st = c.subtitle;
    let r = c.reset;

    println!(
        r#"
{sp}   *    .   *{r}
{sh}    ▄▀▀▀▀▀▄{r}       {tt} ___  _   ___ ___ ___ ___  ___  ___ ___ {r}
{sh}   █       █{r}      {tt}| _ \/_\ / __/ __| __/ _ \| _ \/ __| __|{r}
{bd}  ▄█▄▄▄▄▄▄▄█▄{r}     {tt}|  _/ _ \\__ \__ \ _| (_) |   / (_ | _| {r}
{bd}  █████{kh}▄{bd}█████{r}     {tt}|_|/_/ \_\___/___/_| \___/|_|_\\___|___|{r}
{bd}  █████{kh}█{bd}█████{r}
{bd}  ▀▀▀▀▀▀▀▀▀▀▀{r}     {st}"Hammering out passwords worth keeping..."{r}
"#
    );
}
