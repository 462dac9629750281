//! End-to-end tests driving the shell with command transcripts.

use std::fs::File;
use std::io::{BufReader, Write};

use metro_planner::network::NetworkBuilder;
use metro_planner::shell::{Session, Shell, ShellConfig};

fn run(config: ShellConfig, input: &str) -> (Shell, String) {
    let mut shell = Shell::new(config);
    let mut output = Vec::new();
    shell.run(input.as_bytes(), &mut output).unwrap();
    (shell, String::from_utf8(output).unwrap())
}

/// Output lines with prompts stripped, skipping lines that were only prompts.
fn printed(output: &str, system: &str) -> Vec<String> {
    let prompt = format!("[{system}] >>> ");
    output
        .lines()
        .map(|line| line.replace(&prompt, ""))
        .filter(|line| !line.is_empty())
        .collect()
}

const BALTIMORE: &str = "\
Baltimore
create station Owings
create station OldCourt
create station Penn
create station Camden
create station Airport
connect stations Owings OldCourt Green
connect stations OldCourt Penn Green
connect stations Penn Camden Light
connect stations Camden Airport Light
create train G1 Green Owings
plan trip Owings Airport
plan trip Airport Owings
plan trip Penn Penn
exit
";

#[test]
fn baltimore_session() {
    let (shell, output) = run(ShellConfig::default(), BALTIMORE);

    assert!(output.starts_with(">>> [Baltimore] >>> "));
    assert_eq!(
        printed(&output, "Baltimore"),
        vec![
            ">>> start on the Green line --> OldCourt --> Penn \
             --> transfer from Green line to Light line --> Camden --> Airport",
            "start on the Light line --> Camden --> Penn \
             --> transfer from Light line to Green line --> OldCourt --> Owings",
            "Penn",
        ]
    );

    let session = shell.session();
    assert_eq!(session.network().len(), 5);
    assert_eq!(session.trains().len(), 1);
}

#[test]
fn listings() {
    let input = "\
create station A
create station B
connect stations A B Red
create train T1 Red A
create train T2 Red B
display stations
display trains
get station info A
get train info T2
exit
";
    let (_, output) = run(ShellConfig::default().with_system_name("M"), input);

    assert_eq!(
        printed(&output, "M"),
        vec![
            "       A",
            "       B",
            "*** Information for Train T1 ***",
            "      line: Red",
            "      Current Position: A",
            "*** Information for Train T2 ***",
            "      line: Red",
            "      Current Position: B",
            "*** Information for Station A ***",
            "    Red Line - Next Station: B",
            "*** Information for Train T2 ***",
            "    Line: Red",
            "    Current Position: B",
        ]
    );
}

#[test]
fn errors_are_reported_and_recoverable() {
    let input = "\
create station A
create station A
connect stations A Z Red
plan trip A Z
create train T1 Red Z
warp A
create station B
connect stations A B Red
plan trip A B
exit
";
    let (_, output) = run(ShellConfig::default().with_system_name("M"), input);

    assert_eq!(
        printed(&output, "M"),
        vec![
            "Station with the name A already exists.",
            "    Z is not in the list of stations.",
            "Z is not in the list of stations.",
            "    Z isn't a station",
            "Unknown command warp A",
            "start on the Red line --> B",
        ]
    );
}

#[test]
fn prebuilt_network() {
    let network = NetworkBuilder::new()
        .stations(["S1", "S2", "S3", "S4"])
        .connect("S1", "S2", "Red")
        .connect("S2", "S3", "Blue")
        .build()
        .unwrap();
    let mut shell = Shell::with_session(
        ShellConfig::default().with_system_name("M"),
        Session::with_network(network),
    );

    let mut output = Vec::new();
    shell
        .run("plan trip S1 S4\nplan trip S3 S3\n".as_bytes(), &mut output)
        .unwrap();

    assert_eq!(
        printed(&String::from_utf8(output).unwrap(), "M"),
        vec!["No route from S1 to S4.", "S3"]
    );
}

#[test]
fn script_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trip.metro");
    let mut file = File::create(&path).unwrap();
    write!(
        file,
        "Script\ncreate station S1\ncreate station S2\ncreate station S3\n\
         connect stations S1 S2 Red\nconnect stations S2 S3 Blue\nplan trip S1 S3\n"
    )
    .unwrap();
    drop(file);

    let mut shell = Shell::new(ShellConfig::default().with_echo(true));
    let mut output = Vec::new();
    shell
        .run(BufReader::new(File::open(&path).unwrap()), &mut output)
        .unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains(
        "[Script] >>> plan trip S1 S3\n\
         start on the Red line --> S2 --> transfer from Red line to Blue line --> S3\n"
    ));
    assert!(output.ends_with("[Script] >>> \n"));
}
