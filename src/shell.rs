use std::io::{self, BufRead, Write};
use colored::Colorize;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::model::LibraryItem;
use crate::core::library::{LibraryError, LibraryResult};

// Interactive menu loop. Runs until the user picks Exit or the input ends.
// Domain errors are reported as a one-line message and the loop continues;
// nothing partial is persisted by a failed operation.
pub fn run<R: BufRead, W: Write>(service: &mut dyn CatalogService,
                                 input: &mut R, output: &mut W) -> io::Result<()> {
    match menu_loop(service, input, output) {
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => Ok(()),
        other => other,
    }
}

fn menu_loop<R: BufRead, W: Write>(service: &mut dyn CatalogService,
                                   input: &mut R, output: &mut W) -> io::Result<()> {
    loop {
        writeln!(output)?;
        writeln!(output, "{}", "--- Library Menu ---".bold())?;
        writeln!(output, "1. Add Book")?;
        writeln!(output, "2. Add Magazine")?;
        writeln!(output, "3. Display Items")?;
        writeln!(output, "4. Borrow Item")?;
        writeln!(output, "5. Return Item")?;
        writeln!(output, "6. Exit")?;
        let choice = prompt(input, output, "Enter choice: ")?;

        let outcome = match choice.as_str() {
            "1" => add_book(service, input, output)?,
            "2" => add_magazine(service, input, output)?,
            "3" => {
                for line in service.display_items() {
                    writeln!(output, "{}", line)?;
                }
                Ok(None)
            }
            "4" => borrow_item(service, input, output)?,
            "5" => return_item(service, input, output)?,
            "6" => return Ok(()),
            _ => {
                writeln!(output, "Invalid choice. Try again.")?;
                Ok(None)
            }
        };
        match outcome {
            Ok(Some(message)) => writeln!(output, "{}", message)?,
            Ok(None) => {}
            Err(err) => writeln!(output, "{} {}", "Error:".red(), err)?,
        }
    }
}

fn add_book<R: BufRead, W: Write>(service: &mut dyn CatalogService, input: &mut R,
                                  output: &mut W) -> io::Result<LibraryResult<Option<&'static str>>> {
    let id = match number(prompt(input, output, "Enter ID: ")?.as_str()) {
        Ok(id) => id,
        Err(err) => return Ok(Err(err)),
    };
    let title = prompt(input, output, "Enter Title: ")?;
    let author = prompt(input, output, "Enter Author: ")?;
    Ok(service.add_item(LibraryItem::book(id, title.as_str(), author.as_str()))
        .map(|_| Some("Book added.")))
}

fn add_magazine<R: BufRead, W: Write>(service: &mut dyn CatalogService, input: &mut R,
                                      output: &mut W) -> io::Result<LibraryResult<Option<&'static str>>> {
    let id = match number(prompt(input, output, "Enter ID: ")?.as_str()) {
        Ok(id) => id,
        Err(err) => return Ok(Err(err)),
    };
    let title = prompt(input, output, "Enter Title: ")?;
    let issue_number = match number(prompt(input, output, "Enter Issue Number: ")?.as_str()) {
        Ok(issue_number) => issue_number,
        Err(err) => return Ok(Err(err)),
    };
    Ok(service.add_item(LibraryItem::magazine(id, title.as_str(), issue_number))
        .map(|_| Some("Magazine added.")))
}

fn borrow_item<R: BufRead, W: Write>(service: &mut dyn CatalogService, input: &mut R,
                                     output: &mut W) -> io::Result<LibraryResult<Option<&'static str>>> {
    let id = match number(prompt(input, output, "Enter ID to borrow: ")?.as_str()) {
        Ok(id) => id,
        Err(err) => return Ok(Err(err)),
    };
    Ok(service.borrow_item(id).map(|_| Some("Item borrowed.")))
}

fn return_item<R: BufRead, W: Write>(service: &mut dyn CatalogService, input: &mut R,
                                     output: &mut W) -> io::Result<LibraryResult<Option<&'static str>>> {
    let id = match number(prompt(input, output, "Enter ID to return: ")?.as_str()) {
        Ok(id) => id,
        Err(err) => return Ok(Err(err)),
    };
    Ok(service.return_item(id).map(|_| Some("Item returned.")))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> io::Result<String> {
    write!(output, "{}", text)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        // end of input, unwinds to run() which treats it as a clean exit
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
    }
    Ok(line.trim().to_string())
}

fn number(field: &str) -> LibraryResult<i64> {
    field.parse()
        .map_err(|_| LibraryError::parse(format!("invalid number {:?}", field).as_str()))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use tempfile::TempDir;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::domain::Configuration;
    use crate::shell;

    fn run_session(service: &mut dyn CatalogService, script: &str) -> String {
        colored::control::set_override(false);
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        shell::run(service, &mut input, &mut output).expect("shell should not fail");
        String::from_utf8(output).expect("output should be utf-8")
    }

    fn test_service(dir: &TempDir) -> Box<dyn CatalogService> {
        factory::create_catalog_service(&Configuration::new(dir.path().join("library_data.txt")))
    }

    #[test]
    fn test_should_add_and_display_through_menu() {
        let dir = TempDir::new().expect("should create temp dir");
        let mut service = test_service(&dir);
        let output = run_session(service.as_mut(), "1\n1\nDune\nFrank Herbert\n3\n6\n");
        assert!(output.contains("Book added."));
        assert!(output.contains("[Book] 1: Dune by Frank Herbert - Available"));
    }

    #[test]
    fn test_should_borrow_and_return_through_menu() {
        let dir = TempDir::new().expect("should create temp dir");
        let mut service = test_service(&dir);
        let output = run_session(service.as_mut(), "2\n2\nWired\n305\n4\n2\n3\n5\n2\n6\n");
        assert!(output.contains("Magazine added."));
        assert!(output.contains("Item borrowed."));
        assert!(output.contains("[Magazine] 2: Wired, Issue #305 - Borrowed"));
        assert!(output.contains("Item returned."));
    }

    #[test]
    fn test_should_report_unknown_id_and_continue() {
        let dir = TempDir::new().expect("should create temp dir");
        let mut service = test_service(&dir);
        let output = run_session(service.as_mut(), "4\n9\n3\n6\n");
        assert!(output.contains("Error: Item not found."));
        assert!(output.contains("No items in the library."));
    }

    #[test]
    fn test_should_report_invalid_choice() {
        let dir = TempDir::new().expect("should create temp dir");
        let mut service = test_service(&dir);
        let output = run_session(service.as_mut(), "9\n6\n");
        assert!(output.contains("Invalid choice. Try again."));
    }

    #[test]
    fn test_should_report_non_numeric_input_and_continue() {
        let dir = TempDir::new().expect("should create temp dir");
        let mut service = test_service(&dir);
        let output = run_session(service.as_mut(), "4\nabc\n6\n");
        assert!(output.contains("Error: invalid number \"abc\""));
    }

    #[test]
    fn test_should_exit_cleanly_on_end_of_input() {
        let dir = TempDir::new().expect("should create temp dir");
        let mut service = test_service(&dir);
        let output = run_session(service.as_mut(), "3\n");
        assert!(output.contains("No items in the library."));
    }
}
