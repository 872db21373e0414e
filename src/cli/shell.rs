//! Interactive shell.
//!
//! A prompt-driven menu for building canvases and shapes by hand:
//! `create`, `edit`, `save`, `delete`, `list`, `show` and `end`. Input is any
//! `BufRead`, so sessions can be scripted. End of input behaves like `end`.
//!
//! Errors from the engine (a pixel off the canvas, a missing file) are
//! reported and the session carries on.

use std::io::{self, BufRead, Write};

use clap::Args;

use crate::error::{Result, TileError};
use crate::output::Printer;
use crate::parser::{parse_colour, parse_coords, parse_dimensions, parse_pair};
use crate::render::preview;
use crate::store::{self, ImageFormatKind};
use crate::studio::Studio;
use crate::types::{Canvas, Colour, RepeatOptions, DEFAULT_RADIUS};

/// Create, edit and save canvases interactively
#[derive(Args, Debug)]
pub struct ShellArgs {
    /// Seed for random cuts (default: system entropy)
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: ShellArgs, printer: &Printer) -> Result<()> {
    let rng = match args.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), rng);
    shell.run()?;
    printer.status("Finished", "shell session");
    Ok(())
}

/// A shell session over arbitrary input and output.
pub struct Shell<R, W> {
    input: R,
    out: W,
    studio: Studio,
    rng: fastrand::Rng,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, out: W, rng: fastrand::Rng) -> Self {
        Self {
            input,
            out,
            studio: Studio::new(),
            rng,
        }
    }

    pub fn studio(&self) -> &Studio {
        &self.studio
    }

    /// Run the main menu until `end` or end of input.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let prompt = "Enter a command (create, edit, save, delete, list, show or end):";
            let Some(cmd) = self.ask(prompt)? else {
                return Ok(());
            };

            match cmd.to_lowercase().as_str() {
                "end" => return Ok(()),
                "create" => self.create()?,
                "edit" => self.edit()?,
                "save" => self.save()?,
                "delete" => self.delete()?,
                "list" => self.list()?,
                "show" => self.show()?,
                other => self.say(&format!("{} is not a command.", other))?,
            }
        }
    }

    fn create(&mut self) -> Result<()> {
        loop {
            let Some(kind) = self.ask("Are we creating a canvas or a shape? c/s")? else {
                return Ok(());
            };
            match kind.to_lowercase().as_str() {
                "c" => return self.create_canvas(),
                "s" => return self.create_shape(),
                _ => self.say("Enter c or s.")?,
            }
        }
    }

    fn create_canvas(&mut self) -> Result<()> {
        let Some(name) = self.ask("Name of the canvas?")? else {
            return Ok(());
        };

        loop {
            let Some(size) = self.ask("Size? e.g. 32x32")? else {
                return Ok(());
            };
            let Some(background) = self.ask("Background colour? r, g, b[, a] (blank for none)")?
            else {
                return Ok(());
            };
            let Some(line) = self.ask("Line colour? r, g, b[, a] (blank for none)")? else {
                return Ok(());
            };
            let Some(file) = self.ask(&file_prompt())? else {
                return Ok(());
            };
            let Some(directory) = self.ask("Output directory?")? else {
                return Ok(());
            };

            let parsed = parse_dimensions(&size).and_then(|(w, h)| {
                Ok((w, h, optional_colour(&background)?, optional_colour(&line)?))
            });
            let (width, height, background, line) = match parsed {
                Ok(values) => values,
                Err(e) => {
                    self.report(&e)?;
                    continue;
                }
            };

            let canvas = Canvas::new(width, height)?
                .with_background(background)
                .with_line_colour(line)
                .with_output(&file, directory);
            if canvas.output().file_name() != file {
                self.say(&format!(
                    "{} has no recognised extension, saving as {}.",
                    file,
                    canvas.output().file_name()
                ))?;
            }
            self.studio.add_canvas(name.clone(), canvas);
            return self.say(&format!("Created canvas {}.", name));
        }
    }

    fn create_shape(&mut self) -> Result<()> {
        let Some(name) = self.ask("Name of the shape?")? else {
            return Ok(());
        };
        let Some(canvas) = self.ask("Which canvas does it go on?")? else {
            return Ok(());
        };
        if self.studio.canvas(&canvas).is_err() {
            return self.say("Canvas does not exist.");
        }

        let (coords, colour) = loop {
            let Some(coords) = self.ask("Coordinates? e.g. (1, 0), (1, 1), (1, 2)")? else {
                return Ok(());
            };
            let Some(colour) = self.ask("Colour? r, g, b[, a]")? else {
                return Ok(());
            };
            match parse_coords(&coords).and_then(|c| Ok((c, parse_colour(&colour)?))) {
                Ok(values) => break values,
                Err(e) => self.report(&e)?,
            }
        };
        self.studio.add_shape(name.clone(), &canvas, coords, colour)?;

        loop {
            let Some(answer) = self.ask("Will this shape repeat? y/n")? else {
                return Ok(());
            };
            match answer.to_lowercase().as_str() {
                "y" => {
                    let Some(options) = self.ask_repeat()? else {
                        return Ok(());
                    };
                    if let Err(e) = self.studio.repeat_shape(&name, &options, &mut self.rng) {
                        return self.report(&e);
                    }
                    return self.draw(&name);
                }
                "n" => return self.draw(&name),
                _ => self.say("Enter y or n.")?,
            }
        }
    }

    fn ask_repeat(&mut self) -> Result<Option<RepeatOptions>> {
        loop {
            let Some(count_x) = self.ask("How many horizontal repeats?")? else {
                return Ok(None);
            };
            let Some(count_y) = self.ask("How many vertical repeats?")? else {
                return Ok(None);
            };
            let Some(spacing) = self.ask("Spacing? e.g. 4, 4")? else {
                return Ok(None);
            };
            let Some(start) = self.ask("Lattice start? e.g. 0, 0")? else {
                return Ok(None);
            };
            let Some(random) = self.ask("Randomly cut lattice pixels? y/n")? else {
                return Ok(None);
            };

            let parsed = (|| -> Result<RepeatOptions> {
                let (sx, sy) = parse_pair(&spacing)?;
                let (x, y) = parse_pair(&start)?;
                Ok(RepeatOptions::new()
                    .counts(parse_count(&count_x)?, parse_count(&count_y)?)
                    .spacing(sx, sy)
                    .start(x, y))
            })();
            let mut options = match parsed {
                Ok(options) => options,
                Err(e) => {
                    self.report(&e)?;
                    continue;
                }
            };

            if random.eq_ignore_ascii_case("y") {
                let Some(chance) = self.ask("Chance to keep each lattice pixel? 0 to 1")? else {
                    return Ok(None);
                };
                let Some(cut) = self.ask("Colour of cut pixels? r, g, b[, a] (blank for background)")?
                else {
                    return Ok(None);
                };
                let cut = chance
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| parse_failure(format!("Not a number: {}", chance.trim())))
                    .and_then(|chance| Ok((chance, optional_colour(&cut)?)));
                match cut {
                    Ok((chance, colour)) => options = options.randomized(chance, colour),
                    Err(e) => {
                        self.report(&e)?;
                        continue;
                    }
                }
            }
            return Ok(Some(options));
        }
    }

    fn edit(&mut self) -> Result<()> {
        loop {
            let Some(kind) = self.ask("Are we editing a canvas or a shape? c/s, or end to go back")?
            else {
                return Ok(());
            };
            match kind.to_lowercase().as_str() {
                "c" => self.edit_canvas()?,
                "s" => self.edit_shape()?,
                "end" => return Ok(()),
                _ => self.say("Enter c, s or end.")?,
            }
        }
    }

    fn edit_canvas(&mut self) -> Result<()> {
        let Some(name) = self.ask("Which canvas?")? else {
            return Ok(());
        };
        if self.studio.canvas(&name).is_err() {
            return self.say(&format!("{} not found.", name));
        }

        loop {
            let Some(field) = self.ask(
                "Edit size(a), background colour(bc), line colour(lc), output file(of), \
                 output directory(od), or end to go back:",
            )?
            else {
                return Ok(());
            };
            if field == "end" {
                return Ok(());
            }
            if !matches!(field.as_str(), "a" | "bc" | "lc" | "of" | "od") {
                self.say("Use a, bc, lc, of, od or end.")?;
                continue;
            }
            let Some(value) = self.ask("New value?")? else {
                return Ok(());
            };

            let canvas = self.studio.canvas_mut(&name)?;
            let outcome = match field.as_str() {
                "a" => parse_dimensions(&value).and_then(|(w, h)| canvas.resize(w, h)),
                "bc" => optional_colour(&value).map(|c| canvas.set_background(c)),
                "lc" => optional_colour(&value).map(|c| canvas.set_line_colour(c)),
                "of" => {
                    canvas.set_output_file(value.trim());
                    Ok(())
                }
                _ => {
                    canvas.set_output_directory(value.trim());
                    Ok(())
                }
            };
            match outcome {
                Ok(()) => self.say("Updated.")?,
                Err(e) => self.report(&e)?,
            }
        }
    }

    fn edit_shape(&mut self) -> Result<()> {
        let Some(name) = self.ask("Which shape?")? else {
            return Ok(());
        };
        if self.studio.shape(&name).is_err() {
            return self.say(&format!("{} not found.", name));
        }
        let Some(field) = self.ask("Edit coords(cr) or colour(co)?")? else {
            return Ok(());
        };
        let Some(value) = self.ask("New value?")? else {
            return Ok(());
        };

        let shape = self.studio.shape_mut(&name)?;
        let outcome = match field.as_str() {
            "cr" => parse_coords(&value).map(|coords| shape.set_coords(coords)),
            "co" => parse_colour(&value).map(|colour| shape.set_colour(colour)),
            _ => return self.say("Use cr or co."),
        };
        if let Err(e) = outcome {
            return self.report(&e);
        }

        match self.studio.redraw_shape(&name, DEFAULT_RADIUS) {
            Ok(()) => self.say(&format!("Redrew {}.", name)),
            Err(e) => self.report(&e),
        }
    }

    fn save(&mut self) -> Result<()> {
        let Some(name) = self.ask("Which canvas are we saving?")? else {
            return Ok(());
        };
        if self.studio.canvas(&name).is_err() {
            return self.say(&format!("{} not found.", name));
        }
        let Some(multiple) = self.ask("Save more than one copy? y/n")? else {
            return Ok(());
        };

        let copies = if multiple.eq_ignore_ascii_case("y") {
            let Some(count) = self.ask("How many copies?")? else {
                return Ok(());
            };
            match parse_count(&count) {
                Ok(count) => Some(count),
                Err(e) => return self.report(&e),
            }
        } else {
            None
        };

        match store::save(self.studio.canvas(&name)?, copies, 1) {
            Ok(paths) => {
                for path in paths {
                    self.say(&format!("Saved {}.", path.display()))?;
                }
                Ok(())
            }
            Err(e) => self.report(&e),
        }
    }

    fn delete(&mut self) -> Result<()> {
        let Some(name) = self.ask("Which canvas's output should be deleted?")? else {
            return Ok(());
        };
        let directory = match self.studio.canvas(&name) {
            Ok(canvas) => canvas.output().directory().display().to_string(),
            Err(_) => return self.say(&format!("{} not found.", name)),
        };

        let Some(whole) = self.ask("Delete the whole output directory as well? y/n")? else {
            return Ok(());
        };
        if !whole.eq_ignore_ascii_case("y") {
            let result = store::delete_image(self.studio.canvas(&name)?);
            return match result {
                Ok(path) => self.say(&format!("Deleted {}.", path.display())),
                Err(TileError::NotFound { path }) => {
                    self.say(&format!("{} does not exist.", path.display()))
                }
                Err(e) => self.report(&e),
            };
        }

        let Some(confirm) = self.ask(&format!("Really delete {}? y to confirm", directory))? else {
            return Ok(());
        };
        if !confirm.eq_ignore_ascii_case("y") {
            return self.say("Going back.");
        }
        match store::delete_directory(self.studio.canvas(&name)?) {
            Ok(true) => self.say(&format!("Deleted {}.", directory)),
            Ok(false) => self.say(&format!("{} does not exist.", directory)),
            Err(e) => self.report(&e),
        }
    }

    fn list(&mut self) -> Result<()> {
        let canvases: Vec<String> = self.studio.canvas_names().map(String::from).collect();
        let shapes: Vec<String> = self.studio.shape_names().map(String::from).collect();
        self.say(&format!("Canvases: {}", canvases.join(", ")))?;
        self.say(&format!("Shapes: {}", shapes.join(", ")))
    }

    fn show(&mut self) -> Result<()> {
        let Some(name) = self.ask("Which canvas?")? else {
            return Ok(());
        };
        let text = match self.studio.canvas(&name) {
            Ok(canvas) => preview(canvas),
            Err(e) => return self.report(&e),
        };
        self.say(&text)
    }

    fn draw(&mut self, name: &str) -> Result<()> {
        match self.studio.draw_shape(name, DEFAULT_RADIUS) {
            Ok(()) => self.say(&format!("Drew {}.", name)),
            Err(e) => self.report(&e),
        }
    }

    /// Prompt and read one trimmed line. `None` at end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        writeln!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", message)?;
        Ok(())
    }

    fn report(&mut self, error: &TileError) -> Result<()> {
        writeln!(self.out, "{}", error)?;
        Ok(())
    }
}

fn file_prompt() -> String {
    let extensions: Vec<String> = ImageFormatKind::extensions()
        .map(|ext| format!(".{}", ext))
        .collect();
    format!("Output file name? ({})", extensions.join(", "))
}

/// Parse a colour, treating blank input as unset.
fn optional_colour(input: &str) -> Result<Option<Colour>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_colour(input)
}

fn parse_count(input: &str) -> Result<u32> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| parse_failure(format!("Not a count: {}", input.trim())))
}

fn parse_failure(message: String) -> TileError {
    TileError::Parse {
        message,
        help: None,
    }
}
