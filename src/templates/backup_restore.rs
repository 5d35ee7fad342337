use super::BoilerplateScript;

pub(crate) fn scripts() -> Vec<BoilerplateScript> {
    vec![
        BoilerplateScript::new(
            "backup-directory",
            "Backup Directory Script",
            "Creates a backup of a directory and stores it in a specified location",
            "backup-restore",
            r##"#!/bin/bash

# Directory Backup Script
# Description: Creates a compressed backup of a directory
# Usage: ./backup_directory.sh [source_dir] [backup_dir]

# Set default directories
SOURCE_DIR=${1:-"/path/to/source"}
BACKUP_DIR=${2:-"/path/to/backups"}
DATE=$(date +"%Y%m%d_%H%M%S")
BACKUP_FILE="backup_${DATE}.tar.gz"

# Check if source directory exists
if [ ! -d "$SOURCE_DIR" ]; then
  echo "Error: Source directory $SOURCE_DIR does not exist."
  exit 1
fi

# Create backup directory if it doesn't exist
if [ ! -d "$BACKUP_DIR" ]; then
  mkdir -p "$BACKUP_DIR"
fi

# Create backup
echo "Creating backup of $SOURCE_DIR..."
tar -czf "$BACKUP_DIR/$BACKUP_FILE" -C "$(dirname "$SOURCE_DIR")" "$(basename "$SOURCE_DIR")"

# Check if backup was successful
if [ $? -eq 0 ]; then
  echo "Backup completed successfully: $BACKUP_DIR/$BACKUP_FILE"
  echo "Backup size: $(du -h "$BACKUP_DIR/$BACKUP_FILE" | cut -f1)"
else
  echo "Error: Backup failed."
  exit 1
fi

exit 0
"##,
        ),
        BoilerplateScript::new(
            "mysql-backup",
            "MySQL Database Backup",
            "Backs up a MySQL database and saves it as an SQL file",
            "backup-restore",
            r##"#!/bin/bash

# MySQL Database Backup Script
# Description: Creates a backup of a MySQL database
# Usage: ./mysql_backup.sh [database] [username] [password]

# MySQL credentials
DB_NAME=${1:-"database_name"}
DB_USER=${2:-"root"}
DB_PASS=${3:-"password"}
BACKUP_DIR="/path/to/backups"
DATE=$(date +"%Y%m%d_%H%M%S")
BACKUP_FILE="$DB_NAME-$DATE.sql"

# Create backup directory if it doesn't exist
if [ ! -d "$BACKUP_DIR" ]; then
  mkdir -p "$BACKUP_DIR"
fi

# Create database backup
echo "Creating backup of MySQL database: $DB_NAME..."
mysqldump -u "$DB_USER" -p"$DB_PASS" "$DB_NAME" > "$BACKUP_DIR/$BACKUP_FILE"

# Check if backup was successful
if [ $? -eq 0 ]; then
  echo "Database backup completed successfully: $BACKUP_DIR/$BACKUP_FILE"

  # Compress the backup
  gzip "$BACKUP_DIR/$BACKUP_FILE"
  echo "Backup compressed: $BACKUP_DIR/$BACKUP_FILE.gz"
  echo "Backup size: $(du -h "$BACKUP_DIR/$BACKUP_FILE.gz" | cut -f1)"
else
  echo "Error: Database backup failed."
  exit 1
fi

exit 0
"##,
        ),
        BoilerplateScript::new(
            "backup-scheduler",
            "Automated Backup Scheduler (Cron Job)",
            "Schedules a cron job to run the backup script periodically",
            "backup-restore",
            r##"#!/bin/bash

# Backup Scheduler Script
# Description: Sets up a cron job to run backups automatically
# Usage: ./backup_scheduler.sh [backup_script_path] [schedule]

BACKUP_SCRIPT=${1:-"/path/to/backup_script.sh"}
SCHEDULE=${2:-"0 2 * * *"}  # Default: Run at 2:00 AM daily

# Check if the backup script exists and is executable
if [ ! -x "$BACKUP_SCRIPT" ]; then
  echo "Error: Backup script $BACKUP_SCRIPT does not exist or is not executable."
  echo "Please provide a valid path to the backup script."
  exit 1
fi

# Create a temporary file for the new crontab
TEMP_CRON=$(mktemp)

# Export current crontab to the temporary file
crontab -l > "$TEMP_CRON" 2>/dev/null

# Check if the backup script is already scheduled
if grep -q "$BACKUP_SCRIPT" "$TEMP_CRON"; then
  echo "Backup script is already scheduled in crontab. Updating schedule..."
  sed -i "/$BACKUP_SCRIPT/d" "$TEMP_CRON"
fi

# Add the new cron job
echo "$SCHEDULE $BACKUP_SCRIPT" >> "$TEMP_CRON"

# Load the new crontab
crontab "$TEMP_CRON"

# Clean up the temporary file
rm "$TEMP_CRON"

echo "Backup scheduled successfully:"
echo "Script: $BACKUP_SCRIPT"
echo "Schedule: $SCHEDULE"
echo "To view scheduled cron jobs, run: crontab -l"

exit 0
"##,
        ),
        BoilerplateScript::new(
            "restore-backup",
            "Restore From Backup",
            "Restores a directory or MySQL database from a backup",
            "backup-restore",
            r##"#!/bin/bash

# Restore From Backup Script
# Description: Restores a directory or database from a backup
# Usage: ./restore_backup.sh [backup_file] [destination_dir]

BACKUP_FILE=${1:-""}
DEST_DIR=${2:-""}

# Check if backup file was provided
if [ -z "$BACKUP_FILE" ]; then
  echo "Error: Please provide a backup file to restore."
  exit 1
fi

# Check if backup file exists
if [ ! -f "$BACKUP_FILE" ]; then
  echo "Error: Backup file $BACKUP_FILE does not exist."
  exit 1
fi

# Determine the type of backup based on file extension
if [[ "$BACKUP_FILE" == *.tar.gz ]]; then
  # Directory backup
  if [ -z "$DEST_DIR" ]; then
    echo "Error: Please provide a destination directory for restoration."
    exit 1
  fi

  # Create destination directory if it doesn't exist
  if [ ! -d "$DEST_DIR" ]; then
    mkdir -p "$DEST_DIR"
  fi

  echo "Restoring directory backup from $BACKUP_FILE to $DEST_DIR..."
  tar -xzf "$BACKUP_FILE" -C "$DEST_DIR"

elif [[ "$BACKUP_FILE" == *.sql.gz ]]; then
  # MySQL database backup (gzipped)
  echo "Restoring MySQL database backup from $BACKUP_FILE..."

  # Extract database name from filename (assuming format: dbname-date.sql.gz)
  DB_NAME=$(basename "$BACKUP_FILE" | sed 's/-[0-9]\{8\}_[0-9]\{6\}.sql.gz$//')

  read -p "Enter MySQL username: " DB_USER
  read -sp "Enter MySQL password: " DB_PASS
  echo

  # Restore database
  gunzip < "$BACKUP_FILE" | mysql -u "$DB_USER" -p"$DB_PASS" "$DB_NAME"

elif [[ "$BACKUP_FILE" == *.sql ]]; then
  # MySQL database backup (uncompressed)
  echo "Restoring MySQL database backup from $BACKUP_FILE..."

  # Extract database name from filename (assuming format: dbname-date.sql)
  DB_NAME=$(basename "$BACKUP_FILE" | sed 's/-[0-9]\{8\}_[0-9]\{6\}.sql$//')

  read -p "Enter MySQL username: " DB_USER
  read -sp "Enter MySQL password: " DB_PASS
  echo

  # Restore database
  mysql -u "$DB_USER" -p"$DB_PASS" "$DB_NAME" < "$BACKUP_FILE"

else
  echo "Error: Unsupported backup file format. Supported formats: tar.gz, sql.gz, sql"
  exit 1
fi

# Check if restoration was successful
if [ $? -eq 0 ]; then
  echo "Restoration completed successfully."
else
  echo "Error: Restoration failed."
  exit 1
fi

exit 0
"##,
        ),
    ]
}
