//! Room display formatting

use crate::models::Room;

/// Format a list of rooms as a table
pub fn format_room_list(rooms: &[Room]) -> String {
    if rooms.is_empty() {
        return "No rooms found.".to_string();
    }

    let ref_width = rooms
        .iter()
        .map(|r| r.reference.len())
        .max()
        .unwrap_or(3)
        .max(3);

    let name_width = rooms
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<ref_width$}  {:<name_width$}  {:<10}  {}\n",
        "Ref",
        "Name",
        "Area",
        "Description",
        ref_width = ref_width,
        name_width = name_width,
    ));

    output.push_str(&format!(
        "{:-<ref_width$}  {:-<name_width$}  {:-<10}  {:-<20}\n",
        "",
        "",
        "",
        "",
        ref_width = ref_width,
        name_width = name_width,
    ));

    for room in rooms {
        output.push_str(&format!(
            "{:<ref_width$}  {:<name_width$}  {:<10}  {}\n",
            room.reference,
            room.name,
            room.area,
            room.description,
            ref_width = ref_width,
            name_width = name_width,
        ));
    }

    output
}

/// Format a single room's details
pub fn format_room_details(room: &Room) -> String {
    let mut output = String::new();

    output.push_str(&format!("Room: {}\n", room.name));
    output.push_str(&format!("  Reference:  {}\n", room.reference));
    output.push_str(&format!("  ID:         {}\n", room.id));
    if !room.area.is_empty() {
        output.push_str(&format!("  Area:       {}\n", room.area));
    }
    if !room.description.is_empty() {
        output.push('\n');
        output.push_str(&format!("  Description: {}\n", room.description));
    }

    output
}
