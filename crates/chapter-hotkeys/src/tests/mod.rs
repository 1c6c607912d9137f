mod chapter_log;
