use anyhow::Result;
use clap::{Parser, ValueEnum};
use gradebook_playlist::{Playlist, Song, Student};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser, Debug)]
#[command(name = "gradebook-playlist")]
#[command(about = "Demonstrate the grade book and playlist manager", long_about = None)]
struct Args {
    /// Which demonstration to run
    #[arg(long, value_enum, default_value = "all")]
    demo: Demo,

    /// Seed for the playlist shuffle (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Also print the entities as JSON
    #[arg(long)]
    json: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Demo {
    Grades,
    Playlist,
    All,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if matches!(args.demo, Demo::Grades | Demo::All) {
        run_gradebook_demo(args.json)?;
    }

    if matches!(args.demo, Demo::Playlist | Demo::All) {
        run_playlist_demo(args.seed, args.json)?;
    }

    Ok(())
}

fn run_gradebook_demo(json: bool) -> Result<()> {
    println!("STUDENT GRADE MANAGEMENT SYSTEM");
    println!("===================================\n");

    let mut student1 = Student::new("STU001", "Ali Mohammadi", "Computer Science")?;
    let mut student2 = Student::new("STU002", "Sara Ahmadi", "Electrical Engineering")?;

    println!("ADDING GRADES TO STUDENT 1:");
    for grade in [85.5, 92.0, 78.5, 88.0, 105.0, -5.0] {
        report_grade(&mut student1, grade);
    }

    println!("\nADDING GRADES TO STUDENT 2:");
    for grade in [95.0, 87.5, 76.0] {
        report_grade(&mut student2, grade);
    }

    println!("\nSTUDENT 1 INFORMATION:");
    println!("{}", student1.student_info());
    println!("STUDENT 2 INFORMATION:");
    println!("{}", student2.student_info());

    println!("DETAILED STATISTICS:");
    for (label, student) in [("Student 1", &student1), ("Student 2", &student2)] {
        println!(
            "{} - Average: {:.2}, Highest: {:?}, Lowest: {:?}, Letter: {}",
            label,
            student.average(),
            student.highest_grade(),
            student.lowest_grade(),
            student.letter_grade()
        );
    }

    println!("\nREMOVING A GRADE:");
    match student1.remove_grade(1) {
        Ok(removed) => println!(
            "Grade {:?} at index {} removed successfully!",
            removed.value, removed.index
        ),
        Err(e) => println!("Error: {}", e),
    }

    println!("\nUPDATED STUDENT 1 INFORMATION:");
    println!("{}", student1.student_info());

    println!("TESTING EDGE CASES:");
    let mut empty_student = Student::new("STU003", "Empty Student", "Mathematics")?;
    println!("{}", empty_student.student_info());
    match empty_student.remove_grade(0) {
        Ok(removed) => println!("Remove from empty: removed {:?}", removed.value),
        Err(e) => println!("Remove from empty: Error: {}", e),
    }

    match Student::new("  ", "Nobody", "Nowhere") {
        Ok(_) => println!("Blank ID accepted"),
        Err(e) => println!("Blank ID rejected: {}", e),
    }

    if json {
        println!("\n{}", serde_json::to_string_pretty(&[&student1, &student2])?);
    }

    Ok(())
}

fn report_grade(student: &mut Student, grade: f64) {
    match student.add_grade(grade) {
        Ok(()) => println!("Grade {:?} added successfully!", grade),
        Err(e) => println!("Error: {}", e),
    }
}

fn run_playlist_demo(seed: Option<u64>, json: bool) -> Result<()> {
    println!("\nMUSIC PLAYLIST MANAGEMENT SYSTEM");
    println!("===================================\n");

    let songs = [
        Song::new("Bohemian Rhapsody", "Queen", 354, "Rock"),
        Song::new("Shape of You", "Ed Sheeran", 234, "Pop"),
        Song::new("Blinding Lights", "The Weeknd", 200, "Synthwave"),
        Song::new("Take Five", "Dave Brubeck", 324, "Jazz"),
        Song::new("Hotel California", "Eagles", 391, "Rock"),
        Song::new("Perfect", "Ed Sheeran", 263, "Pop"),
        Song::new("Yesterday", "The Beatles", 125, "Rock"),
    ];

    let mut playlist = Playlist::new("Favorites");

    println!("Adding songs to the playlist:");
    for song in &songs {
        report_add(&mut playlist, song.clone());
    }

    println!("\nDuplicate check:");
    report_add(&mut playlist, songs[0].clone());

    println!("\nOriginal playlist:");
    println!("{}", playlist.playlist_info());

    println!("Songs by Ed Sheeran:");
    for song in playlist.find_songs_by_artist("Ed Sheeran") {
        println!("   - {}", song);
    }

    println!("\nShuffled playlist:");
    match seed {
        Some(seed) => playlist.shuffle_with(&mut StdRng::seed_from_u64(seed)),
        None => playlist.shuffle(),
    }
    println!("{}", playlist.playlist_info());

    println!("Export:");
    println!("{}", playlist.export());

    println!("Removing a song:");
    let removed = playlist.remove_song_by_name("Take Five", "Dave Brubeck");
    println!("'Take Five' removed: {}", removed);

    println!("\nPlaylist after removal:");
    println!("{}", playlist.playlist_info());

    println!("Final statistics:");
    println!("Song count: {}", playlist.song_count());
    println!("Total duration: {}", playlist.formatted_total_duration());

    println!("\nEmpty playlist:");
    println!("{}", Playlist::new("Empty").playlist_info());

    println!("Sample songs:");
    for song in songs.iter().take(3) {
        println!("{}", song.song_info());
    }

    if json {
        println!("\n{}", serde_json::to_string_pretty(&playlist)?);
    }

    Ok(())
}

fn report_add(playlist: &mut Playlist, song: Song) {
    match playlist.add_song(song) {
        Ok(()) => println!("added successfully."),
        Err(e) => println!("{}", e),
    }
}
