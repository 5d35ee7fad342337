//! Starter templates for the composer dropdown. The blank template is a pure
//! pass-through: generating with an empty description returns it unchanged.

use super::BoilerplateScript;

pub(crate) fn scripts() -> Vec<BoilerplateScript> {
    vec![
        BoilerplateScript::new(
            "blank",
            "Blank Script",
            "Start from scratch",
            "general",
            "#!/bin/bash\n\n# Your script here\n\necho \"Hello World\"",
        ),
        BoilerplateScript::new(
            "user-mgmt",
            "User Management",
            "Create users and set permissions",
            "general",
            r##"#!/bin/bash

# User Management Script
# Usage: ./user_mgmt.sh [add|remove] [username]

ACTION=${1:-"add"}
USERNAME=${2:-"newuser"}

if [ "$ACTION" = "add" ]; then
  echo "Adding user $USERNAME"
  useradd -m $USERNAME
  echo "User $USERNAME created successfully"
elif [ "$ACTION" = "remove" ]; then
  echo "Removing user $USERNAME"
  userdel -r $USERNAME
  echo "User $USERNAME removed successfully"
else
  echo "Invalid action. Use 'add' or 'remove'"
  exit 1
fi
"##,
        ),
        BoilerplateScript::new(
            "backup",
            "Backup Script",
            "Backup files or directories",
            "general",
            r##"#!/bin/bash

# Backup Script
# Usage: ./backup.sh [source_directory] [destination_directory]

SOURCE_DIR=${1:-"/path/to/source"}
DEST_DIR=${2:-"/path/to/backup"}
TIMESTAMP=$(date +"%Y%m%d_%H%M%S")
BACKUP_FILE="backup_${TIMESTAMP}.tar.gz"

# Check if source directory exists
if [ ! -d "$SOURCE_DIR" ]; then
  echo "Source directory does not exist!"
  exit 1
fi

# Create destination directory if it doesn't exist
mkdir -p $DEST_DIR

# Perform backup
echo "Creating backup of $SOURCE_DIR..."
tar -czf "$DEST_DIR/$BACKUP_FILE" -C "$(dirname "$SOURCE_DIR")" "$(basename "$SOURCE_DIR")"

echo "Backup completed: $DEST_DIR/$BACKUP_FILE"
"##,
        ),
    ]
}
