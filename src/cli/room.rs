//! Room CLI commands

use clap::Subcommand;

use crate::display::room::{format_room_details, format_room_list};
use crate::error::LedgerResult;
use crate::services::RoomService;
use crate::storage::Storage;

/// Room subcommands
#[derive(Subcommand)]
pub enum RoomCommands {
    /// Add a new room
    Add {
        /// Stable reference (e.g. "R1")
        reference: String,
        /// Room name
        name: String,
        /// Free-text description
        #[arg(short, long)]
        description: Option<String>,
        /// Floor area (e.g. "12 sqm")
        #[arg(short, long)]
        area: Option<String>,
    },
    /// List all rooms
    List,
    /// Show room details
    Show {
        /// Room reference or ID
        room: String,
    },
    /// Edit a room
    Edit {
        /// Room reference or ID
        room: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New floor area
        #[arg(short, long)]
        area: Option<String>,
    },
    /// Delete a room
    Delete {
        /// Room reference or ID
        room: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// Handle a room command
pub fn handle_room_command(storage: &Storage, cmd: RoomCommands) -> LedgerResult<()> {
    let service = RoomService::new(storage);

    match cmd {
        RoomCommands::Add {
            reference,
            name,
            description,
            area,
        } => {
            let room = service.create(&reference, &name, description.as_deref(), area.as_deref())?;

            println!("Created room: {}", room.name);
            println!("  Reference: {}", room.reference);
            println!("  ID: {}", room.id);
        }

        RoomCommands::List => {
            let rooms = service.list()?;
            print!("{}", format_room_list(&rooms));
        }

        RoomCommands::Show { room } => {
            let found = service
                .find(&room)?
                .ok_or_else(|| crate::error::LedgerError::room_not_found(&room))?;

            print!("{}", format_room_details(&found));
        }

        RoomCommands::Edit {
            room,
            name,
            description,
            area,
        } => {
            let found = service
                .find(&room)?
                .ok_or_else(|| crate::error::LedgerError::room_not_found(&room))?;

            if name.is_none() && description.is_none() && area.is_none() {
                println!("No changes specified. Use --name, --description or --area.");
                return Ok(());
            }

            let updated = service.update(
                found.id,
                name.as_deref(),
                description.as_deref(),
                area.as_deref(),
            )?;
            println!("Updated room: {}", updated.name);
        }

        RoomCommands::Delete { room, force } => {
            let found = service
                .find(&room)?
                .ok_or_else(|| crate::error::LedgerError::room_not_found(&room))?;

            if !force {
                println!("About to delete room:");
                println!("  Reference: {}", found.reference);
                println!("  Name:      {}", found.name);
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(found.id)?;
            println!("Deleted room: {} ({})", deleted.name, deleted.reference);
        }
    }

    Ok(())
}
